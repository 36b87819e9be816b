//! Transfer-related types for the transfer ledger
//!
//! This module defines the transfer record as fetched from the account service,
//! together with the enumerated type and status codes and the viewer identity
//! used as the frame of reference for debit/credit classification.

use super::error::LedgerError;
use rust_decimal::Decimal;

/// Account identifier
///
/// Assigned by the account service; this component only looks accounts up.
pub type AccountId = u32;

/// Transfer identifier
///
/// Unique per transfer, assigned by the account service.
pub type TransferId = u32;

/// Transfer types emitted by the account service
///
/// The service encodes these as `0` (request) and `1` (send).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferType {
    /// The initiator asks another account to push funds to them
    Request,

    /// The initiator pushes funds to the recipient
    Send,
}

impl TransferType {
    /// Human-readable label shown in tables and detail views
    pub fn label(self) -> &'static str {
        match self {
            TransferType::Request => "Request",
            TransferType::Send => "Send",
        }
    }

    /// Numeric code used on the wire
    pub fn code(self) -> u8 {
        match self {
            TransferType::Request => 0,
            TransferType::Send => 1,
        }
    }
}

impl TryFrom<u8> for TransferType {
    type Error = LedgerError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(TransferType::Request),
            1 => Ok(TransferType::Send),
            other => Err(LedgerError::UnknownTypeCode { code: other }),
        }
    }
}

/// Transfer status codes emitted by the account service
///
/// Encoded as `0` (pending), `1` (approved) and `2` (rejected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferStatus {
    /// Awaiting approval or rejection
    Pending,

    /// Funds have moved
    Approved,

    /// The payer declined the request
    Rejected,
}

impl TransferStatus {
    /// Human-readable label shown in tables and detail views
    pub fn label(self) -> &'static str {
        match self {
            TransferStatus::Pending => "Pending",
            TransferStatus::Approved => "Approved",
            TransferStatus::Rejected => "Rejected",
        }
    }

    /// Numeric code used on the wire
    pub fn code(self) -> u8 {
        match self {
            TransferStatus::Pending => 0,
            TransferStatus::Approved => 1,
            TransferStatus::Rejected => 2,
        }
    }
}

impl TryFrom<u8> for TransferStatus {
    type Error = LedgerError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(TransferStatus::Pending),
            1 => Ok(TransferStatus::Approved),
            2 => Ok(TransferStatus::Rejected),
            other => Err(LedgerError::UnknownStatusCode { code: other }),
        }
    }
}

/// A transfer as fetched from the account service
///
/// Records are immutable once observed: status changes happen on the service
/// side and the client re-fetches. Fields are private so that every record in
/// circulation went through [`TransferRecord::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    id: TransferId,
    transfer_type: TransferType,
    status: TransferStatus,
    from_account: AccountId,
    to_account: AccountId,
    amount: Decimal,
}

impl TransferRecord {
    /// Create a transfer record, enforcing its invariants
    ///
    /// # Errors
    ///
    /// * [`LedgerError::SelfTransfer`] if `from_account == to_account`
    /// * [`LedgerError::NegativeAmount`] if `amount` is below zero
    pub fn new(
        id: TransferId,
        transfer_type: TransferType,
        status: TransferStatus,
        from_account: AccountId,
        to_account: AccountId,
        amount: Decimal,
    ) -> Result<Self, LedgerError> {
        if from_account == to_account {
            return Err(LedgerError::self_transfer(id, from_account));
        }
        if amount < Decimal::ZERO {
            return Err(LedgerError::negative_amount(id, amount));
        }

        Ok(TransferRecord {
            id,
            transfer_type,
            status,
            from_account,
            to_account,
            amount,
        })
    }

    pub fn id(&self) -> TransferId {
        self.id
    }

    pub fn transfer_type(&self) -> TransferType {
        self.transfer_type
    }

    pub fn status(&self) -> TransferStatus {
        self.status
    }

    pub fn from_account(&self) -> AccountId {
        self.from_account
    }

    pub fn to_account(&self) -> AccountId {
        self.to_account
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Whether the given account is either party of this transfer
    pub fn involves(&self, account: AccountId) -> bool {
        self.from_account == account || self.to_account == account
    }

    /// Copy of this record carrying a new status
    ///
    /// Only the account service moves a transfer between statuses; the console
    /// never calls this on records it displays.
    pub(crate) fn with_status(&self, status: TransferStatus) -> Self {
        TransferRecord {
            status,
            ..self.clone()
        }
    }
}

/// The account id of the currently authenticated user
///
/// Supplied by the caller for every classifier and selector invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub account: AccountId,
}

impl Viewer {
    pub fn new(account: AccountId) -> Self {
        Viewer { account }
    }
}
