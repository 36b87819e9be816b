//! I/O module
//!
//! Handles loading the account service's seed data from CSV.
//!
//! # Components
//!
//! - `csv_format` - row structures and conversion to domain types
//! - `sync_reader` - streaming CSV reader and loaders that skip malformed rows

pub mod csv_format;
pub mod sync_reader;

pub use csv_format::{convert_account_row, convert_transfer_row, CsvAccountRow, CsvTransferRow};
pub use sync_reader::{load_accounts, load_service, load_transfers, SyncReader};
