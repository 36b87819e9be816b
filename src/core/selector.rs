//! Resolution of user selections against displayed transfers
//!
//! The console shows a list of transfers and then asks for an id. This module
//! resolves that id against the list that was shown, and derives the pending
//! subsets the viewer may act on.
//!
//! # Absent vs Empty
//!
//! The account service distinguishes "nothing to return" from "an empty list".
//! [`Fetched`] keeps the two apart so that callers can report "no transactions
//! exist" differently from "none match".

use crate::types::{LedgerError, TransferRecord, TransferStatus, Viewer};

/// Result of a fetch from the account service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<T> {
    /// The service had no data for the request
    Absent,
    /// The service returned data, possibly an empty collection
    Present(T),
}

impl<T> Fetched<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Fetched::Absent)
    }

    pub fn map<U, F>(self, f: F) -> Fetched<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Fetched::Absent => Fetched::Absent,
            Fetched::Present(value) => Fetched::Present(f(value)),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Fetched::Absent => None,
            Fetched::Present(value) => Some(value),
        }
    }

    /// Turn absence into [`LedgerError::AbsentData`] tagged with `context`
    pub fn into_result(self, context: &str) -> Result<T, LedgerError> {
        match self {
            Fetched::Absent => Err(LedgerError::absent_data(context)),
            Fetched::Present(value) => Ok(value),
        }
    }
}

impl<T> From<Option<T>> for Fetched<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            None => Fetched::Absent,
            Some(value) => Fetched::Present(value),
        }
    }
}

/// Outcome of resolving a requested id against a list of transfers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Found(&'a TransferRecord),
    NotFound(i64),
}

impl<'a> Selection<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Selection::Found(_))
    }

    pub fn found(self) -> Option<&'a TransferRecord> {
        match self {
            Selection::Found(record) => Some(record),
            Selection::NotFound(_) => None,
        }
    }

    /// Turn `NotFound` into [`LedgerError::SelectionNotFound`]
    pub fn into_result(self) -> Result<&'a TransferRecord, LedgerError> {
        match self {
            Selection::Found(record) => Ok(record),
            Selection::NotFound(id) => Err(LedgerError::selection_not_found(id)),
        }
    }
}

/// Find the transfer with the requested id
///
/// Takes the id as typed by the user (`i64`) so that negative or out-of-range
/// input resolves to `NotFound` rather than failing a conversion. The scan is
/// linear and the first match wins; no ordering of `records` is assumed.
pub fn find_by_id(records: &[TransferRecord], id: i64) -> Selection<'_> {
    records
        .iter()
        .find(|record| i64::from(record.id()) == id)
        .map_or(Selection::NotFound(id), Selection::Found)
}

/// Records whose status is pending
pub fn filter_pending(records: &[TransferRecord]) -> Vec<TransferRecord> {
    records
        .iter()
        .filter(|record| record.status() == TransferStatus::Pending)
        .cloned()
        .collect()
}

/// Pending records destined to, or requested of, the viewer
///
/// These are the transfers sitting with `to_account == viewer`: the viewer is
/// the one who has to approve or reject them.
pub fn pending_for(records: &[TransferRecord], viewer: Viewer) -> Vec<TransferRecord> {
    records
        .iter()
        .filter(|record| record.status() == TransferStatus::Pending)
        .filter(|record| record.to_account() == viewer.account)
        .cloned()
        .collect()
}
