//! filesum-core: streaming file digest engine
//!
//! Computes the SHA-256 digest of a file incrementally, reporting progress
//! through a bounded event channel and supporting cooperative cancellation.
//! One [`session::SessionManager`] drives at most one hash session at a time;
//! the read-absorb-report loop runs on a dedicated tokio task so the caller
//! is never blocked between progress events and the terminal outcome.

pub mod digest;
pub mod encode;
mod error;
pub mod progress;
pub mod reader;
pub mod session;

pub use error::HashError;
