//! Unique identifier generation
//!
//! Payment and favorite IDs are opaque strings obtained from an
//! `IdGenerator`. The generator is injected into the ledger so tests can
//! substitute a deterministic sequence for the random UUIDs used in
//! production.

use crate::types::PaymentId;
use uuid::Uuid;

/// Source of opaque globally-unique string identifiers
pub trait IdGenerator {
    /// Produce the next unique identifier
    fn next_id(&mut self) -> PaymentId;
}

/// Production generator backed by random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> PaymentId {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator yielding "p-1", "p-2", ...
///
/// Intended for tests and fixtures where stable IDs matter.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: u64,
}

impl SequentialIdGenerator {
    /// Create a generator starting at "p-1"
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> PaymentId {
        self.counter += 1;
        format!("p-{}", self.counter)
    }
}
