//! Wallet Ledger Library
//! # Overview
//!
//! This library provides an in-process financial ledger: accounts with
//! balances, payments with a lifecycle, named payment templates
//! ("favorites"), a concurrent summation utility, and a flat-file
//! persistence format for durability across restarts.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Payment, Favorite, errors)
//! - [`cli`] - CLI argument parsing and command execution
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Operation orchestration
//!   - [`core::account_registry`] - Account state and balance mutation
//!   - [`core::payment_store`] / [`core::favorite_store`] - Entity storage
//!   - [`core::aggregator`] - Concurrent payment summation
//!   - [`core::id`] - Injectable unique-ID generation
//! - [`io`] - Dump file format and directory persistence
//!
//! # Payment Lifecycle
//!
//! Payments are created in `InProgress` status by `pay`. A `reject`
//! refunds the amount and moves the payment to `Fail`; a payment can be
//! rejected at most once. `Ok` is reserved for settlement outside this
//! crate but round-trips through persistence.
//!
//! # Concurrency
//!
//! Ledger-mutating operations perform no internal synchronization and
//! assume single-writer access. The one internally concurrent operation
//! is `sum_payments`, which fans contiguous payment chunks out to scoped
//! worker threads and combines their partial sums under a mutex held only
//! for the accumulator update.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{IdGenerator, Ledger, SequentialIdGenerator, UuidGenerator};
pub use types::{Account, AccountId, Favorite, LedgerError, Money, Payment, PaymentId, PaymentStatus};
