//! Sieve of Eratosthenes with inverted marking.
//!
//! A set bit means the index is composite (or was never a candidate); a clear
//! bit at `i ≥ 2` means `i` is prime once sieving is done. This matches the
//! zeroed storage the bit arrays start from, so no initializing pass is
//! needed.
//!
//! The bound `N` is exclusive: every entry point emits exactly the primes
//! `p` with `2 ≤ p < N`, ascending, and nothing else.

use std::any::type_name;

use crate::arena::BoundedArena;
use crate::bitset::{ArenaBitSet, BitStore, HeapBitSet};
use crate::li::prime_count_bound;
use crate::sink::PrimeSink;
use crate::value::{fits, PrimeValue};
use crate::{ArenaError, SieveError};

/// Largest `i` with `i * i < n`, or 0 for `n ≤ 2`.
///
/// Seeded from a floating square root and then corrected with exact integer
/// comparisons, so precision loss for large `n` never drops a sieving prime.
pub fn sieve_bound(n: usize) -> usize {
    if n <= 2 {
        return 0;
    }
    let limit = n - 1;
    let mut i = (limit as f64).sqrt() as usize;
    while i.checked_mul(i).map_or(true, |sq| sq > limit) {
        i -= 1;
    }
    while (i + 1).checked_mul(i + 1).is_some_and(|sq| sq <= limit) {
        i += 1;
    }
    i
}

/// Marks every composite below `bits.size()`.
fn mark_composites<B: BitStore>(bits: &mut B) {
    let n = bits.size();
    for i in 2..=sieve_bound(n) {
        if !bits.test(i) {
            // smaller multiples carry a prime factor below `i` and are already set
            for j in (i * i..n).step_by(i) {
                bits.set(j);
            }
        }
    }
}

/// Writes every clear index in `2..n` to `out`, ascending.
fn emit<B: BitStore, S: PrimeSink>(bits: &B, n: usize, out: &mut S) {
    let end = n.min(bits.size());
    out.extend_primes(
        (2..end)
            .filter(|&i| !bits.test(i))
            .map(<S::Item as PrimeValue>::from_index),
    );
}

fn sieve_with<B: BitStore, S: PrimeSink>(bits: &mut B, n: usize, out: &mut S) {
    mark_composites(bits);
    emit(&*bits, n, out);
}

fn assert_fits<const N: usize, S: PrimeSink>(_: &S) {
    const { assert!(fits::<S::Item>(N), "output type too narrow for the sieve bound") };
}

/// Writes all primes below `N` to `out`, using a heap-backed bit array.
///
/// The sink's element type must be able to hold `N - 1`; this is checked at
/// compile time.
///
/// ```
/// let mut primes: Vec<u8> = vec![];
/// prime_sieve::sieve_primes::<30>(&mut primes);
/// assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// ```
pub fn sieve_primes<const N: usize>(out: &mut impl PrimeSink) {
    assert_fits::<N, _>(&*out);

    let mut bits = HeapBitSet::new(N);
    sieve_with(&mut bits, N, out);
}

/// Writes all primes below `N` to `out`, carving the bit array from `arena`.
///
/// If the arena cannot hold `N` bits the error is returned and `out` is left
/// untouched. The storage is returned to the arena before this returns.
pub fn sieve_primes_in<const N: usize>(
    arena: &mut BoundedArena,
    out: &mut impl PrimeSink,
) -> Result<(), ArenaError> {
    assert_fits::<N, _>(&*out);

    let mut bits = ArenaBitSet::new_in(arena, N)?;
    sieve_with(&mut bits, N, out);
    Ok(())
}

fn check_fits<T: PrimeValue>(n: usize) -> Result<(), SieveError> {
    if fits::<T>(n) {
        Ok(())
    } else {
        Err(SieveError::ValueOutOfRange {
            bound: n,
            type_name: type_name::<T>(),
        })
    }
}

/// Writes all primes below a runtime bound `n` to `out`.
///
/// Fails without writing anything if the sink's element type cannot hold
/// `n - 1`.
pub fn sieve_primes_below<S: PrimeSink>(n: usize, out: &mut S) -> Result<(), SieveError> {
    check_fits::<S::Item>(n)?;
    let mut bits = HeapBitSet::new(n);
    sieve_with(&mut bits, n, out);
    Ok(())
}

/// Runtime-bound variant of [`sieve_primes_in`].
pub fn sieve_primes_below_in<S: PrimeSink>(
    arena: &mut BoundedArena,
    n: usize,
    out: &mut S,
) -> Result<(), SieveError> {
    check_fits::<S::Item>(n)?;
    let mut bits = ArenaBitSet::new_in(arena, n)?;
    sieve_with(&mut bits, n, out);
    Ok(())
}

/// Collects all primes below `n` into a vector sized from the li estimate.
pub fn primes_below<T: PrimeValue>(n: usize) -> Result<Vec<T>, SieveError> {
    check_fits::<T>(n)?;
    let mut primes: Vec<T> = Vec::with_capacity(prime_count_bound(n));
    sieve_primes_below(n, &mut primes)?;
    Ok(primes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn is_prime(v: u64) -> bool {
        v >= 2 && (2..).take_while(|d| d * d <= v).all(|d| v % d != 0)
    }

    #[test]
    fn test_no_primes_below_two() {
        let mut out: Vec<u32> = vec![];
        sieve_primes::<0>(&mut out);
        sieve_primes::<1>(&mut out);
        sieve_primes::<2>(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_small_bounds() {
        let mut out: Vec<u32> = vec![];
        sieve_primes::<3>(&mut out);
        assert_eq!(out, [2]);

        let mut out: Vec<u32> = vec![];
        sieve_primes::<10>(&mut out);
        assert_eq!(out, [2, 3, 5, 7]);

        let mut out: Vec<u16> = vec![];
        sieve_primes::<30>(&mut out);
        assert_eq!(out, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_squares_of_largest_sieving_prime() {
        // 25 and 49 are only struck by the last prime at or below the root
        let mut out: Vec<u32> = vec![];
        sieve_primes::<26>(&mut out);
        assert_eq!(out.last(), Some(&23));

        let mut out: Vec<u32> = vec![];
        sieve_primes::<50>(&mut out);
        assert_eq!(out.last(), Some(&47));
        assert!(!out.contains(&49));
    }

    #[test]
    fn test_hundred_and_thousand() {
        let mut out: Vec<u64> = vec![];
        sieve_primes::<100>(&mut out);
        assert_eq!(out.len(), 25);
        assert_eq!(out.last(), Some(&97));
        assert_eq!(out.iter().sum::<u64>(), 1060);

        let mut out: Vec<u16> = vec![];
        sieve_primes::<1000>(&mut out);
        assert_eq!(out.len(), 168);
        assert_eq!(out.last(), Some(&997));
    }

    #[test]
    fn test_appends_after_existing_items() {
        let mut out: Vec<u32> = vec![1];
        sieve_primes::<12>(&mut out);
        assert_eq!(out, [1, 2, 3, 5, 7, 11]);
    }

    #[test]
    fn test_u8_fills_its_range() {
        let mut out: Vec<u8> = vec![];
        sieve_primes::<256>(&mut out);
        assert_eq!(out.len(), 54);
        assert_eq!(out.last(), Some(&251));
    }

    #[test]
    fn test_fixed_uint_output() {
        use numext_fixed_uint::U256;

        let mut out: Vec<U256> = vec![];
        sieve_primes::<20>(&mut out);
        let expected: Vec<U256> = [2u64, 3, 5, 7, 11, 13, 17, 19]
            .into_iter()
            .map(U256::from)
            .collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_arena_matches_heap() {
        let mut arena = BoundedArena::with_capacity(1024);
        let mut from_arena: Vec<u32> = vec![];
        sieve_primes_in::<8192>(&mut arena, &mut from_arena).unwrap();
        assert_eq!(arena.in_use(), 0);

        let mut from_heap: Vec<u32> = vec![];
        sieve_primes::<8192>(&mut from_heap);
        assert_eq!(from_arena, from_heap);
        assert_eq!(from_arena.len(), 1028);
    }

    #[test]
    fn test_arena_exhaustion_leaves_sink_untouched() {
        let mut arena = BoundedArena::with_capacity(12);
        let mut out: Vec<u32> = vec![7];
        let err = sieve_primes_in::<100>(&mut arena, &mut out).unwrap_err();
        assert_eq!(
            err,
            ArenaError::CapacityExceeded {
                requested: 13,
                available: 12
            }
        );
        assert_eq!(out, [7]);
        assert_eq!(arena.in_use(), 0);
    }

    #[test]
    fn test_arena_reusable_after_sieve() {
        let mut arena = BoundedArena::with_capacity(125);
        for _ in 0..3 {
            let mut out: Vec<u16> = vec![];
            sieve_primes_in::<1000>(&mut arena, &mut out).unwrap();
            assert_eq!(out.len(), 168);
        }
        assert_eq!(arena.available(), 125);
    }

    #[test]
    fn test_sinks_pick_their_own_element_type() {
        use std::collections::VecDeque;

        use crate::sink::PrimeCount;

        let mut count = PrimeCount::default();
        sieve_primes::<100>(&mut count);
        assert_eq!(count, PrimeCount(25));

        let mut arena = BoundedArena::with_capacity(13);
        let mut queue: VecDeque<u8> = VecDeque::new();
        sieve_primes_in::<100>(&mut arena, &mut queue).unwrap();
        assert_eq!(queue.len(), 25);
        assert_eq!(queue.front(), Some(&2));
        assert_eq!(queue.back(), Some(&97));

        let mut count = PrimeCount(1);
        sieve_primes_below_in(&mut arena, 30, &mut count).unwrap();
        assert_eq!(count, PrimeCount(11));
        assert_eq!(arena.in_use(), 0);
    }

    #[test]
    fn test_runtime_bound_rejects_narrow_type() {
        let mut out: Vec<u8> = vec![];
        let err = sieve_primes_below(300, &mut out).unwrap_err();
        assert_eq!(
            err,
            SieveError::ValueOutOfRange {
                bound: 300,
                type_name: "u8"
            }
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_runtime_bound_arena_error() {
        let mut arena = BoundedArena::with_capacity(1);
        let mut out: Vec<u32> = vec![];
        let err = sieve_primes_below_in(&mut arena, 100, &mut out).unwrap_err();
        assert!(matches!(err, SieveError::Arena(ArenaError::CapacityExceeded { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_primes_below() {
        let primes: Vec<u32> = primes_below(1000).unwrap();
        assert_eq!(primes.len(), 168);
        assert!(primes.capacity() >= 168);
        assert!(primes_below::<u32>(2).unwrap().is_empty());
    }

    #[test]
    fn test_sieve_bound() {
        assert_eq!(sieve_bound(0), 0);
        assert_eq!(sieve_bound(2), 0);
        assert_eq!(sieve_bound(3), 1);
        assert_eq!(sieve_bound(10), 3);
        assert_eq!(sieve_bound(25), 4);
        assert_eq!(sieve_bound(26), 5);
        assert_eq!(sieve_bound(usize::MAX), (1 << (usize::BITS / 2)) - 1);
    }

    proptest! {
        #[test]
        fn prop_sieve_bound_is_exact(n in 3usize..) {
            let i = sieve_bound(n);
            prop_assert!(i * i < n);
            prop_assert!((i + 1).checked_mul(i + 1).map_or(true, |sq| sq >= n));
        }

        #[test]
        fn prop_output_is_ascending_primes(n in 0usize..20_000) {
            let mut out: Vec<u64> = vec![];
            sieve_primes_below(n, &mut out).unwrap();
            prop_assert!(out.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(out.iter().all(|&v| v >= 2 && (v as usize) < n && is_prime(v)));
        }

        #[test]
        fn prop_output_is_complete(n in 0u64..5_000) {
            let mut out: Vec<u64> = vec![];
            sieve_primes_below(n as usize, &mut out).unwrap();
            let expected: Vec<u64> = (0..n).filter(|&v| is_prime(v)).collect();
            prop_assert_eq!(out, expected);
        }
    }
}
