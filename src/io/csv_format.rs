//! CSV format handling for transfer and account seed files
//!
//! This module centralizes all CSV format concerns, providing:
//! - Row structures for deserialization
//! - Conversion from rows to domain types, with validation
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Formats
//!
//! Transfers use the account service's numeric codes:
//!
//! ```text
//! transfer_id,transfer_type_id,transfer_status_id,account_from,account_to,amount
//! 1,1,1,10,20,50.00
//! ```
//!
//! Accounts:
//!
//! ```text
//! account_id,username,balance
//! 10,alice,1000.00
//! ```

use crate::types::{
    Account, AccountId, LedgerError, TransferId, TransferRecord, TransferStatus, TransferType,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Transfer row as it appears in the transfers CSV
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvTransferRow {
    pub transfer_id: TransferId,
    pub transfer_type_id: u8,
    pub transfer_status_id: u8,
    pub account_from: AccountId,
    pub account_to: AccountId,
    pub amount: String,
}

/// Account row as it appears in the accounts CSV
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvAccountRow {
    pub account_id: AccountId,
    pub username: String,
    pub balance: String,
}

fn parse_decimal(raw: &str) -> Result<Decimal, LedgerError> {
    Decimal::from_str(raw.trim()).map_err(|_| LedgerError::invalid_input(raw))
}

/// Convert a transfer row into a validated [`TransferRecord`]
///
/// # Errors
///
/// - Unknown type or status code
/// - Unparseable or negative amount
/// - Source and destination are the same account
pub fn convert_transfer_row(row: CsvTransferRow) -> Result<TransferRecord, LedgerError> {
    let transfer_type = TransferType::try_from(row.transfer_type_id)?;
    let status = TransferStatus::try_from(row.transfer_status_id)?;
    let amount = parse_decimal(&row.amount)?;

    TransferRecord::new(
        row.transfer_id,
        transfer_type,
        status,
        row.account_from,
        row.account_to,
        amount,
    )
}

/// Convert an account row into an [`Account`]
///
/// Usernames are trimmed; an empty username is rejected.
pub fn convert_account_row(row: CsvAccountRow) -> Result<Account, LedgerError> {
    let username = row.username.trim();
    if username.is_empty() {
        return Err(LedgerError::invalid_input(&row.username));
    }
    let balance = parse_decimal(&row.balance)?;

    Ok(Account::new(row.account_id, username, balance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn transfer_row(type_id: u8, status_id: u8, from: u32, to: u32, amount: &str) -> CsvTransferRow {
        CsvTransferRow {
            transfer_id: 1,
            transfer_type_id: type_id,
            transfer_status_id: status_id,
            account_from: from,
            account_to: to,
            amount: amount.to_string(),
        }
    }

    #[rstest]
    #[case::approved_send(1, 1, TransferType::Send, TransferStatus::Approved)]
    #[case::pending_request(0, 0, TransferType::Request, TransferStatus::Pending)]
    #[case::rejected_request(0, 2, TransferType::Request, TransferStatus::Rejected)]
    fn test_convert_transfer_row_valid(
        #[case] type_id: u8,
        #[case] status_id: u8,
        #[case] expected_type: TransferType,
        #[case] expected_status: TransferStatus,
    ) {
        let record = convert_transfer_row(transfer_row(type_id, status_id, 10, 20, "50.00")).unwrap();

        assert_eq!(record.id(), 1);
        assert_eq!(record.transfer_type(), expected_type);
        assert_eq!(record.status(), expected_status);
        assert_eq!(record.from_account(), 10);
        assert_eq!(record.to_account(), 20);
        assert_eq!(record.amount(), Decimal::new(5000, 2));
    }

    #[rstest]
    #[case::unknown_type(transfer_row(5, 1, 10, 20, "1.00"), LedgerError::UnknownTypeCode { code: 5 })]
    #[case::unknown_status(transfer_row(1, 9, 10, 20, "1.00"), LedgerError::UnknownStatusCode { code: 9 })]
    #[case::bad_amount(transfer_row(1, 1, 10, 20, "ten"), LedgerError::InvalidInput { input: "ten".to_string() })]
    #[case::self_transfer(transfer_row(1, 1, 10, 10, "1.00"), LedgerError::SelfTransfer { id: 1, account: 10 })]
    #[case::negative(transfer_row(1, 1, 10, 20, "-1.00"), LedgerError::NegativeAmount { id: 1, amount: Decimal::new(-100, 2) })]
    fn test_convert_transfer_row_errors(#[case] row: CsvTransferRow, #[case] expected: LedgerError) {
        assert_eq!(convert_transfer_row(row), Err(expected));
    }

    #[test]
    fn test_convert_transfer_row_trims_amount() {
        let record = convert_transfer_row(transfer_row(1, 1, 10, 20, "  12.5 ")).unwrap();
        assert_eq!(record.amount(), Decimal::new(125, 1));
    }

    #[rstest]
    #[case::plain("alice", "1000.00", "alice", Decimal::new(100000, 2))]
    #[case::padded("  bob ", " 0 ", "bob", Decimal::ZERO)]
    fn test_convert_account_row(
        #[case] username: &str,
        #[case] balance: &str,
        #[case] expected_name: &str,
        #[case] expected_balance: Decimal,
    ) {
        let account = convert_account_row(CsvAccountRow {
            account_id: 10,
            username: username.to_string(),
            balance: balance.to_string(),
        })
        .unwrap();

        assert_eq!(account, Account::new(10, expected_name, expected_balance));
    }

    #[rstest]
    #[case::empty_username("   ", "1.00")]
    #[case::bad_balance("carol", "lots")]
    fn test_convert_account_row_errors(#[case] username: &str, #[case] balance: &str) {
        let result = convert_account_row(CsvAccountRow {
            account_id: 30,
            username: username.to_string(),
            balance: balance.to_string(),
        });
        assert!(matches!(result, Err(LedgerError::InvalidInput { .. })));
    }
}
