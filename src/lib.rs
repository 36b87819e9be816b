//! Transfer Ledger Library
//! # Overview
//!
//! Console client for a peer-to-peer transfer ledger: it shows a viewer their
//! past transfers with a debit/credit sign, resolves transfer ids typed at a
//! prompt, and lets them act on pending requests.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (TransferRecord, Account, Viewer, LedgerError)
//! - [`core`] - Business logic components:
//!   - [`core::classifier`] - Sign and labels of a transfer from the viewer's side
//!   - [`core::selector`] - Absent vs present results, id lookup, pending filters
//!   - [`core::traits`] - The account service boundary
//!   - [`core::ledger_service`] - In-memory account service
//! - [`console`] - Prompts, views and the interactive session
//! - [`io`] - CSV seed data loading
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - tracing subscriber setup
//!
//! # Sign Rules
//!
//! The viewer is the *recipient* of a transfer when it is the `to` account and
//! the *sender* otherwise.
//!
//! | Type    | Viewer is recipient | Viewer is sender |
//! |---------|---------------------|------------------|
//! | Send    | `+` credit          | `-` debit        |
//! | Request | `-` debit           | `+` credit       |
//!
//! A request is recorded with the requester as `from` and the payer as `to`,
//! so the payer sees `-` for money it is asked to give.

pub mod cli;
pub mod console;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use crate::console::{Console, Palette, Session};
pub use crate::core::{
    classify, classify_all, find_by_id, filter_pending, Fetched, InMemoryTransferService,
    Selection, Sign, TransferService,
};
pub use crate::io::load_service;
pub use crate::types::{
    Account, AccountId, LedgerError, TransferId, TransferRecord, TransferStatus, TransferType,
    Viewer,
};
