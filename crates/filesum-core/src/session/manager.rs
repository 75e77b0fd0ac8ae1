//! Session manager: one active hash session at a time

use std::path::Path;
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::progress::ProgressSnapshot;
use crate::reader::ChunkedReader;
use crate::HashError;

use super::model::{SessionOutcome, SessionState};
use super::{validate, worker};

/// Capacity of the bounded progress channel.
const PROGRESS_CHANNEL_CAPACITY: usize = 64;

/// The single session slot owned by the manager.
#[derive(Debug)]
struct Slot {
    state: SessionState,
    token: Option<CancellationToken>,
}

#[derive(Debug)]
struct Inner {
    slot: Mutex<Slot>,
    progress_tx: mpsc::Sender<ProgressSnapshot>,
}

/// Orchestrates hash sessions: validates the path, opens the file, runs
/// the worker loop on its own task, and tracks the
/// `Idle → Running → Completed | Cancelled | Failed` state machine.
///
/// At most one session is `Running` at a time; a terminal state accepts a
/// new start, discarding the previous session's leftovers.
#[derive(Debug)]
pub struct SessionManager {
    inner: Arc<Inner>,
}

impl SessionManager {
    /// Create a manager and the receiving end of its progress stream.
    ///
    /// Snapshots arrive in non-decreasing processed-byte order; the
    /// terminal outcome of [`compute_digest`](Self::compute_digest) is
    /// resolved strictly after the last snapshot of its session.
    #[must_use]
    pub fn new() -> (Self, mpsc::Receiver<ProgressSnapshot>) {
        let (progress_tx, progress_rx) = mpsc::channel(PROGRESS_CHANNEL_CAPACITY);
        (
            Self {
                inner: Arc::new(Inner {
                    slot: Mutex::new(Slot {
                        state: SessionState::Idle,
                        token: None,
                    }),
                    progress_tx,
                }),
            },
            progress_rx,
        )
    }

    /// Current state of the session slot.
    pub async fn state(&self) -> SessionState {
        self.inner.slot.lock().await.state
    }

    /// Run one hash session to its terminal state.
    ///
    /// Validates and sanitizes `file_path` before any I/O, opens the file,
    /// then hands the read loop to a spawned worker and awaits its
    /// outcome. The session reaches a terminal state even if this future
    /// is dropped by the caller.
    ///
    /// # Errors
    /// [`HashError::InvalidPath`] before any session state is touched;
    /// [`HashError::AlreadyRunning`] while another session is in flight
    /// (the in-flight session is unaffected); open and read errors as
    /// classified by the reader.
    pub async fn compute_digest(&self, file_path: &str) -> Result<SessionOutcome, HashError> {
        let path = validate::sanitize_path_input(file_path)?;

        // Hold the slot across open so concurrent starts serialize; an
        // open failure goes straight to Failed without reaching Running.
        let mut slot = self.inner.slot.lock().await;
        if slot.state == SessionState::Running {
            return Err(HashError::AlreadyRunning);
        }

        let reader = match ChunkedReader::open(Path::new(&path)).await {
            Ok(reader) => reader,
            Err(err) => {
                slot.state = SessionState::Failed;
                slot.token = None;
                tracing::warn!(path = %path, error = %err, "failed to open file");
                return Err(err);
            }
        };

        let token = CancellationToken::new();
        slot.state = SessionState::Running;
        slot.token = Some(token.clone());
        drop(slot);

        let session_id = Uuid::new_v4();
        tracing::info!(%session_id, path = %path, bytes = reader.len(), "hash session started");

        // The spawned task owns the terminal transition, so the state
        // machine resolves even if the caller stops polling.
        let inner = Arc::clone(&self.inner);
        let progress_tx = self.inner.progress_tx.clone();
        let handle = tokio::spawn(async move {
            let outcome = worker::run(reader, path, token, progress_tx).await;

            let mut slot = inner.slot.lock().await;
            slot.token = None;
            slot.state = match &outcome {
                Ok(SessionOutcome::Completed(result)) => {
                    tracing::info!(
                        %session_id,
                        hex = %result.hex,
                        elapsed_ms = result.elapsed_ms,
                        "hash session completed"
                    );
                    SessionState::Completed
                }
                Ok(SessionOutcome::Cancelled) => {
                    tracing::info!(%session_id, "hash session cancelled");
                    SessionState::Cancelled
                }
                Err(err) => {
                    tracing::warn!(%session_id, error = %err, "hash session failed");
                    SessionState::Failed
                }
            };

            outcome
        });

        match handle.await {
            Ok(outcome) => outcome,
            Err(err) => Err(HashError::Worker(err.to_string())),
        }
    }

    /// Request cancellation of the active session.
    ///
    /// No-op unless a session is `Running`; idempotent. The request is
    /// observed asynchronously by the worker at its next chunk boundary.
    pub async fn cancel_digest(&self) {
        let slot = self.inner.slot.lock().await;
        if slot.state == SessionState::Running {
            if let Some(token) = &slot.token {
                tracing::debug!("cancellation requested");
                token.cancel();
            }
        }
    }

    /// Force the slot into `Running` with the returned token, without a
    /// worker behind it.
    #[cfg(test)]
    pub(crate) async fn occupy_for_test(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let mut slot = self.inner.slot.lock().await;
        slot.state = SessionState::Running;
        slot.token = Some(token.clone());
        token
    }

    /// Release a slot occupied by `occupy_for_test`.
    #[cfg(test)]
    pub(crate) async fn release_for_test(&self) {
        let mut slot = self.inner.slot.lock().await;
        slot.state = SessionState::Idle;
        slot.token = None;
    }
}
