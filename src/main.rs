//! Wallet Ledger CLI
//!
//! Command-line interface for a flat-file-persisted wallet ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- register +992501182129
//! cargo run -- deposit 1 100
//! cargo run -- pay 1 10 Food
//! cargo run -- sum --chunk-size 4
//! cargo run -- --data-dir /var/lib/wallet history 1 --out-dir reports
//! ```
//!
//! Every invocation imports the ledger from the data directory, applies
//! one operation, and exports the ledger back (read-only commands skip
//! the export).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (validation failure, unknown entity, missing directory, etc.)

use std::process;
use tracing_subscriber::EnvFilter;
use wallet_ledger::cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();
    if let Err(e) = cli::run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
