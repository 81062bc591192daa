//! Error types for the wallet ledger
//!
//! This module defines all error kinds surfaced at the ledger boundary.
//! Every failure is an ordinary recoverable result: validation and
//! not-found failures are detected before any mutation and leave all
//! state unchanged.
//!
//! # Error Categories
//!
//! - **Validation errors**: non-positive amount, duplicate phone,
//!   insufficient balance
//! - **Not-found errors**: account, payment, or favorite lookups
//! - **Storage errors**: missing or unwritable persistence directory
//! - **Parsing errors**: malformed fields in a persisted dump file

use crate::types::account::{AccountId, Money};
use thiserror::Error;

/// Main error type for the wallet ledger
///
/// Each variant carries the context needed to diagnose the failure at the
/// CLI boundary without consulting logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No account exists with the given ID
    #[error("Account {account_id} not found")]
    AccountNotFound {
        /// The account ID that was looked up
        account_id: AccountId,
    },

    /// A deposit or payment amount was zero or negative
    #[error("Amount must be positive, got {amount}")]
    AmountMustBePositive {
        /// The rejected amount
        amount: Money,
    },

    /// The phone number is already registered to another account
    #[error("Phone {phone} is already registered")]
    PhoneRegistered {
        /// The conflicting phone number
        phone: String,
    },

    /// The account balance cannot cover the requested payment
    #[error("Not enough balance on account {account_id}: have {balance}, requested {requested}")]
    NotEnoughBalance {
        /// The paying account
        account_id: AccountId,
        /// Balance at the time of the attempt
        balance: Money,
        /// Requested payment amount
        requested: Money,
    },

    /// No payment exists with the given ID
    #[error("Payment {payment_id} not found")]
    PaymentNotFound {
        /// The payment ID that was looked up
        payment_id: String,
    },

    /// The payment has already been rejected
    ///
    /// Rejecting is refunding; a second reject on the same payment would
    /// refund twice, so it is refused outright.
    #[error("Payment {payment_id} is already rejected")]
    AlreadyRejected {
        /// The payment that is already in the failed state
        payment_id: String,
    },

    /// No favorite exists with the given ID
    #[error("Favorite {favorite_id} not found")]
    FavoriteNotFound {
        /// The favorite ID that was looked up
        favorite_id: String,
    },

    /// The persistence directory is missing, or a file in it could not be
    /// created, read, or written
    #[error("Working directory not found: {path}")]
    WorkingDirectoryNotFound {
        /// The offending path
        path: String,
    },

    /// A persisted dump file contains a malformed field
    ///
    /// Fails the whole import of the file it occurred in; other dump files
    /// are still imported.
    #[error("Parsing error in {file}: {message}")]
    ParsingError {
        /// Name of the dump file being parsed
        file: String,
        /// Description of the malformed field
        message: String,
    },
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        LedgerError::ParsingError {
            file: String::new(),
            message: error.to_string(),
        }
    }
}

// Helper constructors, mostly to keep call sites to one line.

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account_id: AccountId) -> Self {
        LedgerError::AccountNotFound { account_id }
    }

    /// Create an AmountMustBePositive error
    pub fn amount_must_be_positive(amount: Money) -> Self {
        LedgerError::AmountMustBePositive { amount }
    }

    /// Create a PhoneRegistered error
    pub fn phone_registered(phone: &str) -> Self {
        LedgerError::PhoneRegistered {
            phone: phone.to_string(),
        }
    }

    /// Create a NotEnoughBalance error
    pub fn not_enough_balance(account_id: AccountId, balance: Money, requested: Money) -> Self {
        LedgerError::NotEnoughBalance {
            account_id,
            balance,
            requested,
        }
    }

    /// Create a PaymentNotFound error
    pub fn payment_not_found(payment_id: &str) -> Self {
        LedgerError::PaymentNotFound {
            payment_id: payment_id.to_string(),
        }
    }

    /// Create an AlreadyRejected error
    pub fn already_rejected(payment_id: &str) -> Self {
        LedgerError::AlreadyRejected {
            payment_id: payment_id.to_string(),
        }
    }

    /// Create a FavoriteNotFound error
    pub fn favorite_not_found(favorite_id: &str) -> Self {
        LedgerError::FavoriteNotFound {
            favorite_id: favorite_id.to_string(),
        }
    }

    /// Create a WorkingDirectoryNotFound error from a path
    pub fn working_directory_not_found(path: impl AsRef<std::path::Path>) -> Self {
        LedgerError::WorkingDirectoryNotFound {
            path: path.as_ref().display().to_string(),
        }
    }

    /// Create a ParsingError for a named dump file
    pub fn parsing_error(file: &str, message: impl ToString) -> Self {
        LedgerError::ParsingError {
            file: file.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::account_not_found(
        LedgerError::AccountNotFound { account_id: 7 },
        "Account 7 not found"
    )]
    #[case::amount_must_be_positive(
        LedgerError::AmountMustBePositive { amount: -5 },
        "Amount must be positive, got -5"
    )]
    #[case::phone_registered(
        LedgerError::PhoneRegistered { phone: "+992501182129".to_string() },
        "Phone +992501182129 is already registered"
    )]
    #[case::not_enough_balance(
        LedgerError::NotEnoughBalance { account_id: 1, balance: 10, requested: 25 },
        "Not enough balance on account 1: have 10, requested 25"
    )]
    #[case::payment_not_found(
        LedgerError::PaymentNotFound { payment_id: "p-1".to_string() },
        "Payment p-1 not found"
    )]
    #[case::already_rejected(
        LedgerError::AlreadyRejected { payment_id: "p-1".to_string() },
        "Payment p-1 is already rejected"
    )]
    #[case::favorite_not_found(
        LedgerError::FavoriteNotFound { favorite_id: "f-1".to_string() },
        "Favorite f-1 not found"
    )]
    #[case::working_directory_not_found(
        LedgerError::WorkingDirectoryNotFound { path: "/tmp/missing".to_string() },
        "Working directory not found: /tmp/missing"
    )]
    #[case::parsing_error(
        LedgerError::ParsingError { file: "accounts.dump".to_string(), message: "bad balance".to_string() },
        "Parsing error in accounts.dump: bad balance"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::account_not_found(
        LedgerError::account_not_found(7),
        LedgerError::AccountNotFound { account_id: 7 }
    )]
    #[case::not_enough_balance(
        LedgerError::not_enough_balance(1, 10, 25),
        LedgerError::NotEnoughBalance { account_id: 1, balance: 10, requested: 25 }
    )]
    #[case::payment_not_found(
        LedgerError::payment_not_found("p-1"),
        LedgerError::PaymentNotFound { payment_id: "p-1".to_string() }
    )]
    #[case::parsing_error(
        LedgerError::parsing_error("accounts.dump", "bad balance"),
        LedgerError::ParsingError {
            file: "accounts.dump".to_string(),
            message: "bad balance".to_string(),
        }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }
}
