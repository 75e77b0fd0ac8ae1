//! Error taxonomy for hash sessions

use thiserror::Error;

/// Errors that can terminate or reject a hash session.
///
/// Cancellation is not represented here: a cancelled session is a clean
/// terminal outcome ([`crate::session::SessionOutcome::Cancelled`]), not a
/// failure.
#[derive(Debug, Error)]
pub enum HashError {
    /// The path failed validation; no I/O was attempted.
    #[error("invalid file path: {0}")]
    InvalidPath(String),

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("path is a directory: {0}")]
    IsADirectory(String),

    /// Read-time I/O failure after a successful open.
    #[error("i/o error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A session is already running; the in-flight session is unaffected.
    #[error("a hash session is already running")]
    AlreadyRunning,

    /// The worker task could not be joined. Should not occur in practice.
    #[error("hash worker failed: {0}")]
    Worker(String),
}
