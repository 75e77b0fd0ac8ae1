//! Digest module: incremental SHA-256 state machine
//!
//! Drives the standard SHA-256 compression function over arbitrarily
//! chunked input, independent of how the bytes arrive.

mod sha256;

pub use sha256::Sha256State;

#[cfg(test)]
mod tests;
