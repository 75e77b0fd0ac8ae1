//! The read-absorb-report loop
//!
//! Runs on its own tokio task so a session proceeds to a terminal state
//! independently of whoever started it.

use std::time::Instant;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::digest::Sha256State;
use crate::encode::encode_digest;
use crate::progress::{ProgressReporter, ProgressSnapshot};
use crate::reader::{ChunkedReader, CHUNK_SIZE};
use crate::HashError;

use super::model::{HashResult, SessionOutcome};

/// Drive `reader` to exhaustion, cancellation or failure.
///
/// The cancellation token is checked before every chunk read, never
/// mid-read, so cancellation latency is bounded by one chunk's read and
/// absorb time. The reader (and its file handle) is dropped on every exit
/// path.
pub(super) async fn run(
    mut reader: ChunkedReader,
    path: String,
    token: CancellationToken,
    tx: mpsc::Sender<ProgressSnapshot>,
) -> Result<SessionOutcome, HashError> {
    let started = Instant::now();
    let total = reader.len();

    let mut digest = Sha256State::new();
    let mut reporter = ProgressReporter::new(tx, total);
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut processed: u64 = 0;

    loop {
        if token.is_cancelled() {
            tracing::debug!(path = %path, processed, "cancellation observed");
            return Ok(SessionOutcome::Cancelled);
        }

        let n = reader.read_chunk(&mut buf).await?;
        if n == 0 {
            break;
        }

        digest.absorb(&buf[..n]);
        processed += n as u64;
        reporter.report(processed).await;
    }

    // Success only: cancelled and failed sessions never emit 100%.
    reporter.finish().await;

    let raw = digest.finalize();
    let (hex, base64) = encode_digest(&raw);

    Ok(SessionOutcome::Completed(HashResult {
        hex,
        base64,
        elapsed_ms: started.elapsed().as_millis(),
        bytes: total,
        path,
    }))
}
