//! filesum: streaming SHA-256 file digests with progress and cancellation

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use filesum_cli::commands;

#[derive(Parser)]
#[command(name = "filesum")]
#[command(author, version, about = "Streaming SHA-256 file digest tool", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the SHA-256 digest of a file
    Hash {
        /// Path to the file to hash
        path: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Display the hex digest in uppercase
        #[arg(long)]
        uppercase: bool,
    },
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Hash {
            path,
            json,
            uppercase,
        } => {
            commands::hash::run(&path, json, uppercase).await?;
        }
    }

    Ok(())
}
