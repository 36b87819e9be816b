//! Debit/credit classification and display labels
//!
//! The sign of a transfer depends on the transfer type and on which side of the
//! transfer the viewer sits. The account service records request transfers with
//! the payer in the `to` position, so a request addressed to the viewer is a
//! debit while a request the viewer made (viewer in `from`) is a credit. The
//! rule is kept as a four-row table and must not be collapsed.

use crate::types::{TransferRecord, TransferType, Viewer};

/// Direction of funds relative to the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Debit,
    Credit,
}

impl Sign {
    /// Prefix shown before amounts: `+` for credits, `-` for debits
    pub fn symbol(self) -> char {
        match self {
            Sign::Credit => '+',
            Sign::Debit => '-',
        }
    }
}

/// Where the viewer sits in a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `to_account == viewer`
    Recipient,
    /// Anything else; the viewer is taken to be the `from` party
    Sender,
}

impl Relation {
    pub fn of(record: &TransferRecord, viewer: Viewer) -> Self {
        if record.to_account() == viewer.account {
            Relation::Recipient
        } else {
            Relation::Sender
        }
    }
}

/// Classify a transfer as a debit or credit for the viewer
pub fn classify_sign(record: &TransferRecord, viewer: Viewer) -> Sign {
    match (record.transfer_type(), Relation::of(record, viewer)) {
        (TransferType::Send, Relation::Recipient) => Sign::Credit,
        (TransferType::Request, Relation::Recipient) => Sign::Debit,
        (TransferType::Send, Relation::Sender) => Sign::Debit,
        (TransferType::Request, Relation::Sender) => Sign::Credit,
    }
}

/// A transfer together with everything the presenter derives from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classified<'a> {
    pub record: &'a TransferRecord,
    pub sign: Sign,
    pub type_label: &'static str,
    pub status_label: &'static str,
}

impl<'a> Classified<'a> {
    /// Amount prefixed with the sign symbol, e.g. `+50.00`
    pub fn signed_amount(&self) -> String {
        format!("{}{}", self.sign.symbol(), self.record.amount())
    }
}

/// Classify one record for the viewer
pub fn classify(record: &TransferRecord, viewer: Viewer) -> Classified<'_> {
    Classified {
        record,
        sign: classify_sign(record, viewer),
        type_label: record.transfer_type().label(),
        status_label: record.status().label(),
    }
}

/// Classify every record, preserving order
pub fn classify_all(records: &[TransferRecord], viewer: Viewer) -> Vec<Classified<'_>> {
    records.iter().map(|record| classify(record, viewer)).collect()
}
