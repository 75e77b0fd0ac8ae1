mod tests_sha256;
