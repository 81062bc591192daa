//! Core business logic module
//!
//! This module contains the core ledger components:
//! - `id` - injectable unique-ID generation
//! - `account_registry` - account ownership, phone uniqueness, balances
//! - `payment_store` - the payment set with ID-indexed lookup
//! - `favorite_store` - named payment templates
//! - `aggregator` - concurrent payment summation
//! - `ledger` - orchestration across all of the above

pub mod account_registry;
pub mod aggregator;
pub mod favorite_store;
pub mod id;
pub mod ledger;
pub mod payment_store;

pub use account_registry::AccountRegistry;
pub use favorite_store::FavoriteStore;
pub use id::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use ledger::Ledger;
pub use payment_store::PaymentStore;
