mod tests_chunked;
