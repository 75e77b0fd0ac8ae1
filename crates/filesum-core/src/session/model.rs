//! Session model types

use serde::{Deserialize, Serialize};

/// Final output of a successful hash session. Produced exactly once per
/// session and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashResult {
    /// 64 lowercase hex characters.
    pub hex: String,
    /// Standard padded base64, 44 characters.
    pub base64: String,
    /// Wall-clock time from start to finish.
    pub elapsed_ms: u128,
    /// Total bytes hashed.
    pub bytes: u64,
    /// Sanitized source path.
    pub path: String,
}

/// Clean terminal outcome of a session.
///
/// Cancellation is intentional, carries no message, and must not be
/// presented as an error.
#[derive(Debug, Clone)]
pub enum SessionOutcome {
    Completed(HashResult),
    Cancelled,
}

/// Lifecycle state of the session slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Running,
    Completed,
    Cancelled,
    Failed,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        };
        write!(f, "{s}")
    }
}
