//! Payment storage
//!
//! This module provides the `PaymentStore` that owns the ledger's payment
//! set. Payments live in an owned `Vec` with an ID-to-position index for
//! O(1) lookup; positions are stable because payments are never deleted.
//!
//! # Duplicate Handling
//!
//! If a duplicate payment ID is inserted (which only happens when merging
//! a persisted dump), only the first occurrence is kept. Subsequent
//! records with the same ID are ignored.

use crate::types::Payment;
use std::collections::HashMap;

/// Owns the set of payments
pub struct PaymentStore {
    /// Payments in insertion order
    payments: Vec<Payment>,
    /// Payment ID to position in `payments`
    by_id: HashMap<String, usize>,
}

impl PaymentStore {
    /// Create a new empty payment store
    pub fn new() -> Self {
        PaymentStore {
            payments: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Insert a payment, ignoring it if its ID is already present
    ///
    /// Returns whether the payment was actually added.
    pub fn insert(&mut self, payment: Payment) -> bool {
        if self.by_id.contains_key(&payment.id) {
            return false;
        }
        let pos = self.payments.len();
        self.by_id.insert(payment.id.clone(), pos);
        self.payments.push(payment);
        true
    }

    /// Get a payment by ID
    pub fn get(&self, payment_id: &str) -> Option<&Payment> {
        self.by_id.get(payment_id).map(|&pos| &self.payments[pos])
    }

    /// Get a mutable reference to a payment by ID
    ///
    /// Used for status transitions.
    pub fn get_mut(&mut self, payment_id: &str) -> Option<&mut Payment> {
        self.by_id
            .get(payment_id)
            .map(|&pos| &mut self.payments[pos])
    }

    /// All payments in insertion order
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Number of stored payments
    pub fn len(&self) -> usize {
        self.payments.len()
    }

    /// Whether the store holds no payments
    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

impl Default for PaymentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentStatus;

    fn payment(id: &str, amount: i64) -> Payment {
        Payment {
            id: id.to_string(),
            account_id: 1,
            amount,
            category: "Food".to_string(),
            status: PaymentStatus::InProgress,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = PaymentStore::new();
        assert!(store.insert(payment("p-1", 10)));

        let stored = store.get("p-1").unwrap();
        assert_eq!(stored.amount, 10);
        assert_eq!(stored.status, PaymentStatus::InProgress);
        assert!(store.get("p-2").is_none());
    }

    #[test]
    fn test_duplicate_id_first_wins() {
        let mut store = PaymentStore::new();
        assert!(store.insert(payment("p-1", 10)));
        assert!(!store.insert(payment("p-1", 99)));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("p-1").unwrap().amount, 10);
    }

    #[test]
    fn test_get_mut_allows_status_transition() {
        let mut store = PaymentStore::new();
        store.insert(payment("p-1", 10));

        store.get_mut("p-1").unwrap().status = PaymentStatus::Fail;
        assert_eq!(store.get("p-1").unwrap().status, PaymentStatus::Fail);
    }

    #[test]
    fn test_payments_preserve_insertion_order() {
        let mut store = PaymentStore::new();
        store.insert(payment("p-2", 2));
        store.insert(payment("p-1", 1));
        store.insert(payment("p-3", 3));

        let ids: Vec<&str> = store.payments().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-2", "p-1", "p-3"]);
    }
}
