//! Reader module: chunked file access
//!
//! Opens a file, classifies open-time failures, and hands out bounded
//! chunks of bytes until end of file.

mod chunked;

pub use chunked::{ChunkedReader, CHUNK_SIZE};

#[cfg(test)]
mod tests;
