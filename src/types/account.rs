//! Account-related types for the transfer ledger
//!
//! Accounts belong to the account service; the console only reads them to
//! label counterparties, list recipients and show the viewer's balance.

use super::transfer::AccountId;
use rust_decimal::Decimal;

/// A user account as known to the account service
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The account id (u32)
    pub id: AccountId,

    /// Username shown as the counterparty label in detail views
    pub username: String,

    /// Current balance
    ///
    /// Changes only when a send is made or a request is approved.
    pub balance: Decimal,
}

impl Account {
    /// Create an account with the given opening balance
    pub fn new(id: AccountId, username: impl Into<String>, balance: Decimal) -> Self {
        Account {
            id,
            username: username.into(),
            balance,
        }
    }
}
