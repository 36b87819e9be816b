//! Console module
//!
//! Everything the user sees and types.
//!
//! # Components
//!
//! - `prompt` - line-oriented terminal I/O with re-prompting
//! - `presenter` - tables and detail views built from classified transfers
//! - `menu` - menu text and option parsing
//! - `session` - the interactive flows tying the above to the account service

pub mod menu;
pub mod presenter;
pub mod prompt;
pub mod session;

pub use presenter::{HistoryTable, Palette, PendingDetail, PendingTable, TransferDetail};
pub use prompt::Console;
pub use session::{HistoryOutcome, PendingSelection, Session};
