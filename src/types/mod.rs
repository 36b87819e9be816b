//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `transfer`: transfer records, type/status codes and the viewer identity
//! - `account`: account-service view of a user account
//! - `error`: error types for the transfer ledger

pub mod account;
pub mod error;
pub mod transfer;

pub use account::Account;
pub use error::LedgerError;
pub use transfer::{AccountId, TransferId, TransferRecord, TransferStatus, TransferType, Viewer};
