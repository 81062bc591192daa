//! Ledger orchestration
//!
//! This module provides the `Ledger` that coordinates the account
//! registry, the payment store, the favorite store, and the injected ID
//! generator. It enforces the business rules:
//!
//! - Validation before mutation (failed operations leave state untouched)
//! - Validation order for payments: amount, then account existence, then
//!   balance sufficiency
//! - A rejected payment refunds exactly once
//!
//! The ledger performs no internal synchronization; callers invoking it
//! from multiple threads must serialize access themselves. The one
//! internally concurrent operation is [`Ledger::sum_payments`].

use crate::core::account_registry::AccountRegistry;
use crate::core::aggregator;
use crate::core::favorite_store::FavoriteStore;
use crate::core::id::{IdGenerator, UuidGenerator};
use crate::core::payment_store::PaymentStore;
use crate::types::{
    Account, AccountId, Favorite, LedgerError, Money, Payment, PaymentStatus,
};

/// The combined in-memory store of accounts, payments, and favorites
pub struct Ledger {
    registry: AccountRegistry,
    payments: PaymentStore,
    favorites: FavoriteStore,
    id_gen: Box<dyn IdGenerator>,
}

impl Ledger {
    /// Create an empty ledger using random UUIDs for payment IDs
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UuidGenerator))
    }

    /// Create an empty ledger with an injected ID generator
    ///
    /// Tests use this with a sequential generator for deterministic IDs.
    pub fn with_id_generator(id_gen: Box<dyn IdGenerator>) -> Self {
        Ledger {
            registry: AccountRegistry::new(),
            payments: PaymentStore::new(),
            favorites: FavoriteStore::new(),
            id_gen,
        }
    }

    /// Register a new account for a phone number
    ///
    /// # Errors
    ///
    /// Returns `PhoneRegistered` if the phone is already taken.
    pub fn register_account(&mut self, phone: &str) -> Result<Account, LedgerError> {
        self.registry.register_account(phone)
    }

    /// Credit funds to an account
    ///
    /// # Errors
    ///
    /// Returns `AmountMustBePositive` if `amount <= 0`, or
    /// `AccountNotFound` if no such account.
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> Result<(), LedgerError> {
        self.registry.deposit(account_id, amount)
    }

    /// Find an account by its ID
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the ID is unknown.
    pub fn find_account_by_id(&self, account_id: AccountId) -> Result<&Account, LedgerError> {
        self.registry.find_account_by_id(account_id)
    }

    /// Make a payment from an account
    ///
    /// On success the amount is deducted from the account and a new
    /// payment in `InProgress` status is appended and returned.
    ///
    /// # Errors
    ///
    /// Checked in order: `AmountMustBePositive` if `amount <= 0`,
    /// `AccountNotFound` if the account is missing, `NotEnoughBalance` if
    /// the balance cannot cover the amount.
    pub fn pay(
        &mut self,
        account_id: AccountId,
        amount: Money,
        category: &str,
    ) -> Result<Payment, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::amount_must_be_positive(amount));
        }
        // withdraw checks existence before sufficiency, completing the
        // amount -> account -> balance validation order.
        self.registry.withdraw(account_id, amount)?;

        let payment = Payment {
            id: self.id_gen.next_id(),
            account_id,
            amount,
            category: category.to_string(),
            status: PaymentStatus::InProgress,
        };
        self.payments.insert(payment.clone());
        Ok(payment)
    }

    /// Find a payment by its ID
    ///
    /// # Errors
    ///
    /// Returns `PaymentNotFound` if the ID is unknown.
    pub fn find_payment_by_id(&self, payment_id: &str) -> Result<&Payment, LedgerError> {
        self.payments
            .get(payment_id)
            .ok_or_else(|| LedgerError::payment_not_found(payment_id))
    }

    /// Reject a payment, refunding its amount to the owning account
    ///
    /// # Errors
    ///
    /// Returns `PaymentNotFound` if the ID is unknown, or
    /// `AlreadyRejected` if the payment is already in the failed state
    /// (the refund must not happen twice).
    pub fn reject(&mut self, payment_id: &str) -> Result<(), LedgerError> {
        let payment = self
            .payments
            .get(payment_id)
            .ok_or_else(|| LedgerError::payment_not_found(payment_id))?;
        if payment.status == PaymentStatus::Fail {
            return Err(LedgerError::already_rejected(payment_id));
        }
        let (account_id, amount) = (payment.account_id, payment.amount);

        // Refund first; the status flips only after the credit succeeded.
        self.registry.deposit(account_id, amount)?;
        if let Some(payment) = self.payments.get_mut(payment_id) {
            payment.status = PaymentStatus::Fail;
        }
        Ok(())
    }

    /// Repeat a payment as a brand-new one
    ///
    /// Performs a fresh `pay` with the original payment's account, amount,
    /// and category. The new payment gets its own ID and is subject to the
    /// same balance check as any payment; the original record is
    /// unaffected.
    ///
    /// # Errors
    ///
    /// Returns `PaymentNotFound` if the referenced payment does not exist,
    /// plus anything `pay` can return.
    pub fn repeat(&mut self, payment_id: &str) -> Result<Payment, LedgerError> {
        let payment = self
            .payments
            .get(payment_id)
            .ok_or_else(|| LedgerError::payment_not_found(payment_id))?;
        let (account_id, amount, category) = (
            payment.account_id,
            payment.amount,
            payment.category.clone(),
        );
        self.pay(account_id, amount, &category)
    }

    /// Snapshot a payment as a named favorite
    ///
    /// Copies the payment's account, amount, and category into a new
    /// favorite under a fresh unique ID. The snapshot is frozen: later
    /// changes to the source payment do not affect it.
    ///
    /// # Errors
    ///
    /// Returns `PaymentNotFound` if the payment does not exist.
    pub fn favorite_payment(
        &mut self,
        payment_id: &str,
        name: &str,
    ) -> Result<Favorite, LedgerError> {
        let payment = self
            .payments
            .get(payment_id)
            .ok_or_else(|| LedgerError::payment_not_found(payment_id))?;
        let favorite = Favorite {
            id: self.id_gen.next_id(),
            account_id: payment.account_id,
            name: name.to_string(),
            amount: payment.amount,
            category: payment.category.clone(),
        };
        self.favorites.insert(favorite.clone());
        Ok(favorite)
    }

    /// Replay a favorite as a new payment
    ///
    /// # Errors
    ///
    /// Returns `FavoriteNotFound` if the favorite does not exist, plus
    /// anything `pay` can return — balances may have changed since the
    /// favorite was created.
    pub fn pay_from_favorite(&mut self, favorite_id: &str) -> Result<Payment, LedgerError> {
        let favorite = self
            .favorites
            .get(favorite_id)
            .ok_or_else(|| LedgerError::favorite_not_found(favorite_id))?;
        let (account_id, amount, category) = (
            favorite.account_id,
            favorite.amount,
            favorite.category.clone(),
        );
        self.pay(account_id, amount, &category)
    }

    /// Sum all payment amounts, partitioned into chunks of `chunk_size`
    /// summed by concurrent workers
    ///
    /// See [`crate::core::aggregator::sum_payments`] for the partitioning
    /// contract.
    pub fn sum_payments(&self, chunk_size: usize) -> Money {
        aggregator::sum_payments(self.payments.payments(), chunk_size)
    }

    /// All payments made from one account, in ledger order
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the account does not exist.
    pub fn account_history(&self, account_id: AccountId) -> Result<Vec<Payment>, LedgerError> {
        self.registry.find_account_by_id(account_id)?;
        Ok(self
            .payments
            .payments()
            .iter()
            .filter(|payment| payment.account_id == account_id)
            .cloned()
            .collect())
    }

    /// All accounts in insertion order
    pub fn accounts(&self) -> &[Account] {
        self.registry.accounts()
    }

    /// All payments in insertion order
    pub fn payments(&self) -> &[Payment] {
        self.payments.payments()
    }

    /// All favorites in insertion order
    pub fn favorites(&self) -> &[Favorite] {
        self.favorites.favorites()
    }

    /// Merge an account parsed from a persisted dump; see
    /// [`AccountRegistry::absorb`]
    pub fn absorb_account(&mut self, account: Account) -> bool {
        self.registry.absorb(account)
    }

    /// Merge a payment parsed from a persisted dump (first ID wins)
    pub fn absorb_payment(&mut self, payment: Payment) -> bool {
        self.payments.insert(payment)
    }

    /// Merge a favorite parsed from a persisted dump (first ID wins)
    pub fn absorb_favorite(&mut self, favorite: Favorite) -> bool {
        self.favorites.insert(favorite)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
