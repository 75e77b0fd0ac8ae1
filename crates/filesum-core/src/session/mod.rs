//! Session module: hash session lifecycle
//!
//! Owns the one-at-a-time session state machine
//! (`Idle → Running → Completed | Cancelled | Failed`), path validation,
//! and the worker loop that reads, absorbs and reports.

mod manager;
mod model;
mod validate;
mod worker;

pub use manager::SessionManager;
pub use model::{HashResult, SessionOutcome, SessionState};
