//! Transfer Ledger CLI
//!
//! Interactive console over an in-memory transfer ledger seeded from CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --accounts accounts.csv --transfers transfers.csv
//! cargo run -- --accounts accounts.csv --transfers transfers.csv --user bob --plain
//! RUST_LOG=debug cargo run -- --accounts accounts.csv
//! ```
//!
//! # Exit Codes
//!
//! - 0: Session ended (menu exit or end of input)
//! - 1: Error (seed file missing or unreadable, unknown `--user`, terminal failure)

use std::process;
use tracing::error;
use transfer_ledger::cli;
use transfer_ledger::console::{Console, Session};
use transfer_ledger::io::load_service;
use transfer_ledger::logging::init_logging;
use transfer_ledger::{LedgerError, TransferService, Viewer};

fn run(args: &cli::CliArgs) -> Result<(), LedgerError> {
    let service = load_service(&args.accounts, args.transfers.as_deref())?;
    let preset = match &args.user {
        Some(username) => Some(Viewer::new(service.find_account(username)?.id)),
        None => None,
    };

    let mut session = Session::new(service, Console::stdio(), args.palette());
    if let Some(viewer) = preset {
        session = session.with_viewer(viewer);
    }
    session.run()
}

fn main() {
    let args = cli::parse_args();
    init_logging(&args.log_level);

    if let Err(e) = run(&args) {
        error!(error = %e, "session aborted");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
