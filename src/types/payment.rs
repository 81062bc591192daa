//! Payment and favorite types for the wallet ledger
//!
//! Payments are single debit transactions with an evolving status.
//! Favorites are named, frozen templates snapshotted from a payment so it
//! can be replayed later.

use super::account::{AccountId, Money};
use serde::{Deserialize, Serialize};

/// Opaque unique payment/favorite identifier, produced by an `IdGenerator`
pub type PaymentId = String;

/// Lifecycle status of a payment
///
/// New payments start in `InProgress`. `Fail` is reached through a reject,
/// which refunds the owning account. `Ok` is reserved for a settlement step
/// outside this crate; nothing here transitions into it, but it round-trips
/// through the persistence format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    /// Payment has been made and not yet settled or rejected
    InProgress,
    /// Payment settled successfully
    Ok,
    /// Payment was rejected; the amount has been refunded
    Fail,
}

/// A single debit transaction against an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    /// Unique opaque identifier
    pub id: PaymentId,

    /// The account this payment was debited from
    pub account_id: AccountId,

    /// Debited amount; strictly positive
    pub amount: Money,

    /// Free-form category label ("Food", "Transport", ...)
    pub category: String,

    /// Current lifecycle status
    pub status: PaymentStatus,
}

/// A named payment template
///
/// A favorite is a frozen snapshot of a payment's parameters taken at
/// creation time. It does not track later changes to the source payment and
/// is read-only once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    /// Unique opaque identifier
    pub id: PaymentId,

    /// The account the template pays from
    pub account_id: AccountId,

    /// User-chosen name for the template
    pub name: String,

    /// Amount to debit on replay; strictly positive
    pub amount: Money,

    /// Category label copied from the source payment
    pub category: String,
}
