//! Account-related types for the wallet ledger
//!
//! This module defines the Account structure and the money/identifier
//! aliases used throughout the system.

/// Monetary amount in the smallest currency unit (cents, dirams, ...)
///
/// All balances and payment amounts are integers; there is no fractional
/// currency anywhere in the ledger.
pub type Money = i64;

/// Account identifier
///
/// Assigned monotonically by the registry, starting at 1.
pub type AccountId = i64;

/// A registered user account
///
/// Accounts are created once by registration and only have their balance
/// mutated afterwards; they are never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique, monotonically assigned identifier
    pub id: AccountId,

    /// Phone number the account was registered with; unique across the ledger
    pub phone: String,

    /// Current balance in the smallest currency unit
    ///
    /// Invariant: never negative. Every mutation path validates before
    /// touching this field.
    pub balance: Money,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(id: AccountId, phone: impl Into<String>) -> Self {
        Account {
            id,
            phone: phone.into(),
            balance: 0,
        }
    }
}
