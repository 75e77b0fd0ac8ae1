//! Hash command: digest one file with live progress

use std::io::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use filesum_core::session::{SessionManager, SessionOutcome};

use crate::format::{format_bytes, format_duration, format_throughput};

/// Run the hash command
///
/// Starts a session, renders progress to stderr, and prints the result on
/// completion. Ctrl-C requests cancellation of the active session; a
/// cancelled run is reported as such, not as an error.
///
/// # Errors
/// Returns an error for invalid paths, open failures and read failures.
pub async fn run(path: &str, json: bool, uppercase: bool) -> Result<()> {
    let (manager, mut progress) = SessionManager::new();
    let manager = Arc::new(manager);

    let interrupt_manager = Arc::clone(&manager);
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt_manager.cancel_digest().await;
        }
    });

    let renderer = tokio::spawn(async move {
        while let Some(snapshot) = progress.recv().await {
            eprint!(
                "\r{:>3}%  {} / {}",
                snapshot.percent,
                format_bytes(snapshot.processed),
                format_bytes(snapshot.total)
            );
            let _ = std::io::stderr().flush();
        }
    });

    let outcome = manager
        .compute_digest(path)
        .await
        .with_context(|| format!("hashing {path}"));

    interrupt.abort();
    renderer.abort();
    eprintln!();

    match outcome? {
        SessionOutcome::Completed(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let hex = if uppercase {
                    result.hex.to_uppercase()
                } else {
                    result.hex.clone()
                };
                println!("SHA-256  {hex}");
                println!("Base64   {}", result.base64);
                println!(
                    "{} in {} ({})",
                    format_bytes(result.bytes),
                    format_duration(result.elapsed_ms),
                    format_throughput(result.bytes, result.elapsed_ms)
                );
            }
        }
        SessionOutcome::Cancelled => {
            eprintln!("cancelled");
        }
    }

    Ok(())
}
