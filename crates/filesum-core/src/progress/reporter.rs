//! Throttled progress emission

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use super::ProgressSnapshot;

/// Emit only after this many bytes have advanced since the last report...
const REPORT_BYTE_INTERVAL: u64 = 4 * 1024 * 1024;
/// ...or after this much time has passed, whichever comes first.
const REPORT_TIME_INTERVAL: Duration = Duration::from_millis(100);

/// Throttled reporter for one session's progress events.
///
/// Reports after a chunk only when enough bytes or enough time have passed
/// since the previous report, so the event channel is never flooded by
/// small chunks. [`finish`](Self::finish) always emits the completion
/// snapshot and is called on clean completion only.
#[derive(Debug)]
pub struct ProgressReporter {
    tx: mpsc::Sender<ProgressSnapshot>,
    total: u64,
    last_reported: u64,
    last_instant: Instant,
    byte_interval: u64,
    time_interval: Duration,
}

impl ProgressReporter {
    #[must_use]
    pub fn new(tx: mpsc::Sender<ProgressSnapshot>, total: u64) -> Self {
        Self {
            tx,
            total,
            last_reported: 0,
            last_instant: Instant::now(),
            byte_interval: REPORT_BYTE_INTERVAL,
            time_interval: REPORT_TIME_INTERVAL,
        }
    }

    /// Override the throttle thresholds. Used by tests; the defaults are
    /// not user configuration.
    #[must_use]
    pub fn with_intervals(mut self, byte_interval: u64, time_interval: Duration) -> Self {
        self.byte_interval = byte_interval;
        self.time_interval = time_interval;
        self
    }

    /// Report progress after a chunk, subject to throttling.
    pub async fn report(&mut self, processed: u64) {
        let advanced = processed.saturating_sub(self.last_reported);
        if advanced < self.byte_interval && self.last_instant.elapsed() < self.time_interval {
            return;
        }

        self.emit(processed).await;
    }

    /// Unconditionally emit the final snapshot for a cleanly completed
    /// session.
    pub async fn finish(&mut self) {
        self.emit(self.total).await;
    }

    async fn emit(&mut self, processed: u64) {
        self.last_reported = processed;
        self.last_instant = Instant::now();

        // A dropped subscriber only means nobody is watching; the session
        // itself carries on.
        let _ = self.tx.send(ProgressSnapshot::new(processed, self.total)).await;
    }
}
