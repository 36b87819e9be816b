//! Account service boundary
//!
//! The console never owns transfers or accounts. Everything it displays comes
//! through [`TransferService`], which in production fronts the remote account
//! service and in this crate is implemented in memory.

use crate::core::selector::Fetched;
use crate::types::{Account, AccountId, LedgerError, TransferId, TransferRecord};
use rust_decimal::Decimal;

/// Trait for the account service collaborator
///
/// Every call is blocking and returns either a complete result or an error;
/// there is no partial or streaming result.
pub trait TransferService {
    /// All transfers involving the account, or `Absent` if there are none
    fn transfer_history(&self, account: AccountId)
        -> Result<Fetched<Vec<TransferRecord>>, LedgerError>;

    /// Pending transfers awaiting the account's action, or `Absent` if none
    fn pending_requests(&self, account: AccountId)
        -> Result<Fetched<Vec<TransferRecord>>, LedgerError>;

    /// Username of the account, used to label counterparties
    fn username(&self, account: AccountId) -> Result<String, LedgerError>;

    /// Every known account
    fn accounts(&self) -> Vec<Account>;

    /// Current balance of the account
    fn balance(&self, account: AccountId) -> Result<Decimal, LedgerError>;

    /// Push funds from `from` to `to`
    fn send(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<TransferRecord, LedgerError>;

    /// Ask `payer` to push funds to `requester`
    fn request(
        &mut self,
        requester: AccountId,
        payer: AccountId,
        amount: Decimal,
    ) -> Result<TransferRecord, LedgerError>;

    /// Approve a pending transfer, moving its funds
    fn approve(&mut self, id: TransferId) -> Result<TransferRecord, LedgerError>;

    /// Reject a pending transfer; no funds move
    fn reject(&mut self, id: TransferId) -> Result<TransferRecord, LedgerError>;

    /// Look an account up by username
    fn find_account(&self, username: &str) -> Result<Account, LedgerError> {
        self.accounts()
            .into_iter()
            .find(|account| account.username == username)
            .ok_or_else(|| LedgerError::unknown_username(username))
    }
}
