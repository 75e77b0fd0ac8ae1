//! Immutable progress values

use serde::{Deserialize, Serialize};

/// A point-in-time view of a running hash session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Bytes folded into the digest so far. Never exceeds `total`.
    pub processed: u64,
    /// Total byte length of the file, known at open time.
    pub total: u64,
    /// `floor(processed * 100 / total)`; 0 when `total` is 0.
    pub percent: u8,
}

impl ProgressSnapshot {
    /// Build a snapshot, clamping `processed` to `total`.
    #[must_use]
    pub fn new(processed: u64, total: u64) -> Self {
        let processed = processed.min(total);
        let percent = if total > 0 {
            // u128 to keep the multiply exact for very large files
            ((u128::from(processed) * 100) / u128::from(total)) as u8
        } else {
            0
        };

        Self {
            processed,
            total,
            percent,
        }
    }
}
