//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: money, account identifier, and account types
//! - `payment`: payment, payment status, and favorite types
//! - `error`: error types for the wallet ledger

pub mod account;
pub mod error;
pub mod payment;

pub use account::{Account, AccountId, Money};
pub use error::LedgerError;
pub use payment::{Favorite, Payment, PaymentId, PaymentStatus};
