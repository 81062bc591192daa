//! Account registry
//!
//! This module provides the `AccountRegistry` struct which owns the set of
//! user accounts and provides operations for registration and balance
//! mutation.
//!
//! The registry is responsible for:
//! - Allocating monotonically increasing account IDs
//! - Enforcing phone-number uniqueness across accounts
//! - Crediting and debiting balances without ever letting one go negative
//! - Absorbing accounts merged in from a persisted dump
//!
//! Accounts live in an owned `Vec` with two `HashMap` indexes (ID and
//! phone to position), so every lookup is O(1) rather than a linear scan.

use crate::types::{Account, AccountId, LedgerError, Money};
use std::collections::HashMap;

/// Owns all registered accounts and their balances
pub struct AccountRegistry {
    /// Accounts in insertion order; positions are stable (never deleted)
    accounts: Vec<Account>,
    /// Account ID to position in `accounts`
    by_id: HashMap<AccountId, usize>,
    /// Phone number to position in `accounts`
    by_phone: HashMap<String, usize>,
    /// Highest account ID ever assigned, including IDs absorbed via import
    last_id: AccountId,
}

impl AccountRegistry {
    /// Create a new registry with no accounts
    pub fn new() -> Self {
        AccountRegistry {
            accounts: Vec::new(),
            by_id: HashMap::new(),
            by_phone: HashMap::new(),
            last_id: 0,
        }
    }

    /// Register a new account for the given phone number
    ///
    /// Allocates the next integer ID (one greater than the highest ID ever
    /// assigned) and creates the account with a zero balance.
    ///
    /// # Errors
    ///
    /// Returns `PhoneRegistered` if any existing account holds the phone;
    /// nothing is allocated in that case.
    pub fn register_account(&mut self, phone: &str) -> Result<Account, LedgerError> {
        if self.by_phone.contains_key(phone) {
            return Err(LedgerError::phone_registered(phone));
        }
        self.last_id += 1;
        let account = Account::new(self.last_id, phone);
        self.insert_unchecked(account.clone());
        Ok(account)
    }

    /// Credit funds to an account
    ///
    /// Not idempotent: repeated calls add repeatedly.
    ///
    /// # Errors
    ///
    /// Returns `AmountMustBePositive` if `amount <= 0` (checked before the
    /// account lookup, so the error for a bad amount on a missing account
    /// is the amount error), or `AccountNotFound` if no such account.
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> Result<(), LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::amount_must_be_positive(amount));
        }
        let account = self.find_mut(account_id)?;
        account.balance += amount;
        Ok(())
    }

    /// Debit funds from an account
    ///
    /// Balance-deduction primitive used by `Pay`. The caller is expected to
    /// have validated the amount already.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no such account, or `NotEnoughBalance`
    /// if the balance cannot cover the amount. The balance is unchanged on
    /// failure.
    pub fn withdraw(&mut self, account_id: AccountId, amount: Money) -> Result<(), LedgerError> {
        let account = self.find_mut(account_id)?;
        if account.balance < amount {
            return Err(LedgerError::not_enough_balance(
                account_id,
                account.balance,
                amount,
            ));
        }
        account.balance -= amount;
        Ok(())
    }

    /// Find an account by its ID
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the ID is unknown.
    pub fn find_account_by_id(&self, account_id: AccountId) -> Result<&Account, LedgerError> {
        self.by_id
            .get(&account_id)
            .map(|&pos| &self.accounts[pos])
            .ok_or_else(|| LedgerError::account_not_found(account_id))
    }

    /// Absorb an account merged in from a persisted dump
    ///
    /// Dedup is by primary key: a record whose ID is already present is
    /// skipped, first occurrence wins. A record whose phone is already
    /// registered under a different ID is skipped too, preserving phone
    /// uniqueness. Advances the ID counter past the absorbed ID so later
    /// registrations never collide.
    ///
    /// Returns whether the account was actually added.
    pub fn absorb(&mut self, account: Account) -> bool {
        if self.by_id.contains_key(&account.id) || self.by_phone.contains_key(&account.phone) {
            return false;
        }
        if account.id > self.last_id {
            self.last_id = account.id;
        }
        self.insert_unchecked(account);
        true
    }

    /// All accounts in insertion order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the registry holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn find_mut(&mut self, account_id: AccountId) -> Result<&mut Account, LedgerError> {
        self.by_id
            .get(&account_id)
            .map(|&pos| &mut self.accounts[pos])
            .ok_or_else(|| LedgerError::account_not_found(account_id))
    }

    fn insert_unchecked(&mut self, account: Account) {
        let pos = self.accounts.len();
        self.by_id.insert(account.id, pos);
        self.by_phone.insert(account.phone.clone(), pos);
        self.accounts.push(account);
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_assigns_monotonic_ids() {
        let mut registry = AccountRegistry::new();

        let first = registry.register_account("+992501182129").unwrap();
        let second = registry.register_account("+992900000001").unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(first.balance, 0);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_register_duplicate_phone_fails_without_growing() {
        let mut registry = AccountRegistry::new();
        registry.register_account("+992501182129").unwrap();

        let result = registry.register_account("+992501182129");

        assert_eq!(
            result.unwrap_err(),
            LedgerError::phone_registered("+992501182129")
        );
        assert_eq!(registry.len(), 1);

        // The failed attempt must not burn an ID either.
        let next = registry.register_account("+992900000001").unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn test_deposit_accumulates() {
        let mut registry = AccountRegistry::new();
        let account = registry.register_account("+992501182129").unwrap();

        registry.deposit(account.id, 10).unwrap();
        registry.deposit(account.id, 15).unwrap();

        assert_eq!(registry.find_account_by_id(account.id).unwrap().balance, 25);
    }

    #[test]
    fn test_deposit_rejects_non_positive_amounts() {
        let mut registry = AccountRegistry::new();
        let account = registry.register_account("+992501182129").unwrap();
        registry.deposit(account.id, 10).unwrap();

        for amount in [0, -1, -100] {
            let result = registry.deposit(account.id, amount);
            assert_eq!(
                result.unwrap_err(),
                LedgerError::amount_must_be_positive(amount)
            );
        }
        assert_eq!(registry.find_account_by_id(account.id).unwrap().balance, 10);
    }

    #[test]
    fn test_deposit_amount_check_precedes_account_lookup() {
        let mut registry = AccountRegistry::new();

        // Both the amount and the account are bad; the amount error wins.
        let result = registry.deposit(99, 0);
        assert_eq!(result.unwrap_err(), LedgerError::amount_must_be_positive(0));

        let result = registry.deposit(99, 5);
        assert_eq!(result.unwrap_err(), LedgerError::account_not_found(99));
    }

    #[test]
    fn test_withdraw_checks_balance() {
        let mut registry = AccountRegistry::new();
        let account = registry.register_account("+992501182129").unwrap();
        registry.deposit(account.id, 10).unwrap();

        let result = registry.withdraw(account.id, 25);
        assert_eq!(
            result.unwrap_err(),
            LedgerError::not_enough_balance(account.id, 10, 25)
        );
        assert_eq!(registry.find_account_by_id(account.id).unwrap().balance, 10);

        registry.withdraw(account.id, 10).unwrap();
        assert_eq!(registry.find_account_by_id(account.id).unwrap().balance, 0);
    }

    #[test]
    fn test_find_unknown_account() {
        let registry = AccountRegistry::new();
        assert_eq!(
            registry.find_account_by_id(1).unwrap_err(),
            LedgerError::account_not_found(1)
        );
    }

    #[test]
    fn test_absorb_skips_duplicate_id_and_phone() {
        let mut registry = AccountRegistry::new();
        registry.register_account("+992501182129").unwrap();

        // Same ID, different phone: first occurrence wins.
        assert!(!registry.absorb(Account {
            id: 1,
            phone: "+992900000001".to_string(),
            balance: 50,
        }));
        // New ID, conflicting phone: skipped to keep phones unique.
        assert!(!registry.absorb(Account {
            id: 9,
            phone: "+992501182129".to_string(),
            balance: 50,
        }));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find_account_by_id(1).unwrap().balance, 0);
    }

    #[test]
    fn test_absorb_advances_id_counter() {
        let mut registry = AccountRegistry::new();
        assert!(registry.absorb(Account {
            id: 41,
            phone: "+992900000001".to_string(),
            balance: 7,
        }));

        let next = registry.register_account("+992900000002").unwrap();
        assert_eq!(next.id, 42);
    }

    #[test]
    fn test_absorb_low_id_does_not_rewind_counter() {
        let mut registry = AccountRegistry::new();
        registry.register_account("+992900000001").unwrap();
        registry.register_account("+992900000002").unwrap();

        assert!(registry.absorb(Account {
            id: 1000,
            phone: "+992900000003".to_string(),
            balance: 0,
        }));
        // An imported ID below the counter leaves it alone.
        assert!(registry.absorb(Account {
            id: 5,
            phone: "+992900000004".to_string(),
            balance: 0,
        }));

        let next = registry.register_account("+992900000005").unwrap();
        assert_eq!(next.id, 1001);
    }
}
