//! Core logic module
//!
//! - `classifier` - debit/credit sign and labels of a transfer for a viewer
//! - `selector` - absent vs present results, id lookup and pending filters
//! - `traits` - the account service boundary
//! - `ledger_service` - in-memory account service

pub mod classifier;
pub mod ledger_service;
pub mod selector;
pub mod traits;

pub use classifier::{classify, classify_all, classify_sign, Classified, Relation, Sign};
pub use ledger_service::InMemoryTransferService;
pub use selector::{filter_pending, find_by_id, pending_for, Fetched, Selection};
pub use traits::TransferService;
