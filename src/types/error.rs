//! Error types for the transfer ledger
//!
//! This module defines every error that can surface while loading, classifying,
//! selecting and acting on transfers. Messages are written for the console user.
//!
//! # Error Categories
//!
//! - **Session outcomes**: absent data, unknown selection, invalid input. These
//!   are normal outcomes of an interactive session and never end it.
//! - **Record validation**: unknown codes, self transfers, negative amounts.
//! - **Service errors**: unknown accounts, insufficient funds, non-pending requests.
//! - **I/O and parsing**: file access and CSV decoding.

use super::transfer::{AccountId, TransferId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the transfer ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The account service had nothing to return
    ///
    /// Distinct from an empty collection. Rendered as a user message, not fatal.
    #[error("No {context} data available")]
    AbsentData {
        /// What was being fetched (e.g. "transfer history")
        context: String,
    },

    /// Requested id is not present in the displayed set
    ///
    /// Rendered as a user message; the session loop continues.
    #[error("Transfer id {id} does not exist")]
    SelectionNotFound {
        /// The id the user asked for
        id: i64,
    },

    /// Non-numeric entry at a numeric prompt
    ///
    /// Recovered locally by re-prompting or by returning a sentinel.
    #[error("Invalid input '{input}'")]
    InvalidInput {
        /// The raw line that failed to parse
        input: String,
    },

    /// Input stream ended while a prompt was waiting for a line
    #[error("Input closed")]
    InputClosed,

    /// Transfer type code outside the known table
    #[error("Unknown transfer type code {code}")]
    UnknownTypeCode {
        /// The code received
        code: u8,
    },

    /// Transfer status code outside the known table
    #[error("Unknown transfer status code {code}")]
    UnknownStatusCode {
        /// The code received
        code: u8,
    },

    /// A transfer whose source and destination are the same account
    #[error("Transfer {id} moves funds from account {account} to itself")]
    SelfTransfer {
        /// Transfer ID
        id: TransferId,
        /// The account on both sides
        account: AccountId,
    },

    /// A transfer carrying a negative amount
    #[error("Transfer {id} has negative amount {amount}")]
    NegativeAmount {
        /// Transfer ID
        id: TransferId,
        /// The offending amount
        amount: Decimal,
    },

    /// Send or request for an amount that is zero or negative
    #[error("Amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The offending amount
        amount: Decimal,
    },

    /// Balance arithmetic would overflow
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account ID
        account: AccountId,
    },

    /// Account lookup by id failed
    #[error("Account {account} not found")]
    UnknownAccount {
        /// The account id looked up
        account: AccountId,
    },

    /// Account lookup by username failed
    #[error("No account for username '{username}'")]
    UnknownUsername {
        /// The username looked up
        username: String,
    },

    /// Payer cannot cover the amount
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Paying account
        account: AccountId,
        /// Balance at the time of the attempt
        balance: Decimal,
        /// Amount that was to be moved
        requested: Decimal,
    },

    /// Transfer lookup by id failed on the service side
    #[error("Transfer {id} not found")]
    TransferNotFound {
        /// Transfer ID
        id: TransferId,
    },

    /// Attempt to approve or reject a transfer that is no longer pending
    #[error("Transfer {id} is not pending")]
    NotPending {
        /// Transfer ID
        id: TransferId,
    },

    /// I/O error occurred while reading files or writing to the terminal
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create an AbsentData error
    pub fn absent_data(context: &str) -> Self {
        LedgerError::AbsentData {
            context: context.to_string(),
        }
    }

    /// Create a SelectionNotFound error
    pub fn selection_not_found(id: i64) -> Self {
        LedgerError::SelectionNotFound { id }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(input: &str) -> Self {
        LedgerError::InvalidInput {
            input: input.to_string(),
        }
    }

    /// Create a SelfTransfer error
    pub fn self_transfer(id: TransferId, account: AccountId) -> Self {
        LedgerError::SelfTransfer { id, account }
    }

    /// Create a NegativeAmount error
    pub fn negative_amount(id: TransferId, amount: Decimal) -> Self {
        LedgerError::NegativeAmount { id, amount }
    }

    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(amount: Decimal) -> Self {
        LedgerError::NonPositiveAmount { amount }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountId) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create an UnknownAccount error
    pub fn unknown_account(account: AccountId) -> Self {
        LedgerError::UnknownAccount { account }
    }

    /// Create an UnknownUsername error
    pub fn unknown_username(username: &str) -> Self {
        LedgerError::UnknownUsername {
            username: username.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountId, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create a TransferNotFound error
    pub fn transfer_not_found(id: TransferId) -> Self {
        LedgerError::TransferNotFound { id }
    }

    /// Create a NotPending error
    pub fn not_pending(id: TransferId) -> Self {
        LedgerError::NotPending { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::absent_data(
        LedgerError::AbsentData { context: "transfer history".to_string() },
        "No transfer history data available"
    )]
    #[case::selection_not_found(
        LedgerError::SelectionNotFound { id: 99 },
        "Transfer id 99 does not exist"
    )]
    #[case::invalid_input(
        LedgerError::InvalidInput { input: "abc".to_string() },
        "Invalid input 'abc'"
    )]
    #[case::self_transfer(
        LedgerError::SelfTransfer { id: 3, account: 10 },
        "Transfer 3 moves funds from account 10 to itself"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { account: 10, balance: Decimal::new(500, 2), requested: Decimal::new(1000, 2) },
        "Insufficient funds in account 10: balance 5.00, requested 10.00"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(4), message: "bad field".to_string() },
        "CSV parse error at line 4: bad field"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "bad field".to_string() },
        "CSV parse error: bad field"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::absent_data(
        LedgerError::absent_data("pending requests"),
        LedgerError::AbsentData { context: "pending requests".to_string() }
    )]
    #[case::unknown_username(
        LedgerError::unknown_username("bob"),
        LedgerError::UnknownUsername { username: "bob".to_string() }
    )]
    #[case::not_pending(LedgerError::not_pending(5), LedgerError::NotPending { id: 5 })]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: missing");
    }
}
