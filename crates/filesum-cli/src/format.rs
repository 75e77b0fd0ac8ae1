//! Human-readable output formatting

/// Format a byte count with binary-prefixed units, two decimals at most.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    // Trim trailing zeros the way the display layer expects: 1.50 -> 1.5
    let rendered = format!("{value:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{rendered} {}", UNITS[unit])
}

/// Format a millisecond duration into ms / s / m / h buckets.
#[must_use]
pub fn format_duration(ms: u128) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else if ms < 3_600_000 {
        format!("{:.2}m", ms as f64 / 60_000.0)
    } else {
        format!("{:.2}h", ms as f64 / 3_600_000.0)
    }
}

/// Format a throughput as bytes-per-second from a byte count and elapsed
/// milliseconds.
#[must_use]
pub fn format_throughput(bytes: u64, ms: u128) -> String {
    if ms == 0 {
        return "0 B/s".to_string();
    }

    let per_second = (bytes as f64 / (ms as f64 / 1000.0)) as u64;
    format!("{}/s", format_bytes(per_second))
}
