//! Binderver - query the kernel's Binder IPC protocol version.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use binderver::{probe_binder_version, query_binder_version};

/// Query the Binder IPC protocol version supported by the running kernel
#[derive(Parser)]
#[command(name = "binderver")]
#[command(version = "0.1.0")]
#[command(about = "Query the kernel's Binder IPC protocol version", long_about = None)]
struct Cli {
    /// Print only the raw signed result (negative values encode the OS
    /// error; the minimum i32 means the kernel reported no version)
    #[arg(short, long)]
    raw: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if cli.raw {
        println!("{}", probe_binder_version());
        return Ok(());
    }

    match query_binder_version() {
        Ok(version) => {
            tracing::debug!("kernel reported protocol version {}", version);
            println!("Binder protocol version: {}", describe(version));
            Ok(())
        }
        Err(err) => {
            tracing::debug!("probe failed, raw result {}", err.to_raw());
            Err(err.into())
        }
    }
}

/// Human-readable rendering of well-known protocol versions.
fn describe(version: i32) -> String {
    match version {
        7 => "7 (32-bit binder interface)".to_string(),
        8 => "8 (64-bit binder interface)".to_string(),
        other => other.to_string(),
    }
}
