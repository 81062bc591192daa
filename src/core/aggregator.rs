//! Concurrent payment summation
//!
//! Computes the total amount over a payment set, optionally partitioned
//! across worker threads.
//!
//! # Partitioning
//!
//! The `chunk_size` parameter controls chunk size, not worker count: the
//! payment slice is split into contiguous chunks of exactly `chunk_size`
//! elements (the last chunk may be shorter) and one worker is spawned per
//! chunk. Each worker sums its chunk into a local value and only then
//! takes the shared lock to add it into the accumulator, so the lock is
//! held for a single addition rather than the whole chunk scan.
//!
//! The result equals the sequential sum for every valid `chunk_size` and
//! every payment ordering: addition over amounts is commutative and
//! associative. Workers are scoped threads, so the caller blocks until all
//! of them finish; there is no cancellation or timeout.

use crate::types::{Money, Payment};
use std::sync::{Mutex, PoisonError};
use std::thread;

/// Sum the amounts of all payments, partitioned into chunks of
/// `chunk_size` summed by concurrent workers
///
/// With `chunk_size <= 1`, or at most one payment, the sum is computed
/// sequentially in a single pass.
pub fn sum_payments(payments: &[Payment], chunk_size: usize) -> Money {
    if chunk_size <= 1 || payments.len() <= 1 {
        return sequential_sum(payments);
    }

    let total: Mutex<Money> = Mutex::new(0);
    thread::scope(|scope| {
        let total = &total;
        for chunk in payments.chunks(chunk_size) {
            scope.spawn(move || {
                let chunk_sum = sequential_sum(chunk);
                // Lock only for the accumulator update.
                let mut guard = total.lock().unwrap_or_else(PoisonError::into_inner);
                *guard += chunk_sum;
            });
        }
    });
    total.into_inner().unwrap_or_else(PoisonError::into_inner)
}

/// Single-pass reference sum
pub fn sequential_sum(payments: &[Payment]) -> Money {
    payments.iter().map(|payment| payment.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentStatus;
    use rstest::rstest;

    fn payments(amounts: &[Money]) -> Vec<Payment> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, &amount)| Payment {
                id: format!("p-{}", i + 1),
                account_id: 1,
                amount,
                category: "Food".to_string(),
                status: PaymentStatus::InProgress,
            })
            .collect()
    }

    #[test]
    fn test_empty_set_sums_to_zero() {
        assert_eq!(sum_payments(&[], 1), 0);
        assert_eq!(sum_payments(&[], 4), 0);
    }

    #[test]
    fn test_single_payment_is_summed_sequentially() {
        let set = payments(&[42]);
        assert_eq!(sum_payments(&set, 100), 42);
    }

    #[rstest]
    #[case::sequential(1)]
    #[case::pairs(2)]
    #[case::triples(3)]
    #[case::one_chunk_per_payment(7)]
    #[case::single_oversized_chunk(64)]
    fn test_chunked_sum_matches_sequential(#[case] chunk_size: usize) {
        let set = payments(&[1, 2, 3, 5, 8, 13, 21]);
        let expected = sequential_sum(&set);

        assert_eq!(sum_payments(&set, chunk_size), expected);
        assert_eq!(expected, 53);
    }

    #[test]
    fn test_sum_is_order_independent() {
        let forward = payments(&[10, 20, 30, 40, 50]);
        let mut backward = forward.clone();
        backward.reverse();

        assert_eq!(sum_payments(&forward, 2), sum_payments(&backward, 2));
    }

    #[test]
    fn test_every_chunk_size_up_to_set_size() {
        let set = payments(&[7; 25]);
        for chunk_size in 1..=set.len() {
            assert_eq!(sum_payments(&set, chunk_size), 175);
        }
    }
}
