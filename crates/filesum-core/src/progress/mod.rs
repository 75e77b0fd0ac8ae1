//! Progress module: snapshots and throttled reporting
//!
//! Converts reader position into immutable progress snapshots and emits
//! them over a bounded channel at a bounded rate.

mod reporter;
mod snapshot;

pub use reporter::ProgressReporter;
pub use snapshot::ProgressSnapshot;

#[cfg(test)]
mod tests;
