//! Destinations the sieve writes primes into.
//!
//! A sink fixes its own element type, so callers never name it at the call
//! site.
//!
//! ```
//! use std::collections::VecDeque;
//!
//! use prime_sieve::{sieve_primes, sieve_primes_below, PrimeCount};
//!
//! let mut count = PrimeCount::default();
//! sieve_primes::<1000>(&mut count);
//! assert_eq!(count.0, 168);
//!
//! let mut queue: VecDeque<u16> = VecDeque::new();
//! sieve_primes_below(20, &mut queue).unwrap();
//! assert_eq!(queue.pop_back(), Some(19));
//! ```

use std::collections::VecDeque;

use crate::PrimeValue;

/// Forward-only destination for ascending primes.
pub trait PrimeSink {
    /// Element type the primes are written as.
    type Item: PrimeValue;

    /// Appends `primes` in the order they are yielded.
    fn extend_primes<I: Iterator<Item = Self::Item>>(&mut self, primes: I);
}

impl<T: PrimeValue> PrimeSink for Vec<T> {
    type Item = T;

    fn extend_primes<I: Iterator<Item = T>>(&mut self, primes: I) {
        self.extend(primes);
    }
}

impl<T: PrimeValue> PrimeSink for VecDeque<T> {
    type Item = T;

    fn extend_primes<I: Iterator<Item = T>>(&mut self, primes: I) {
        self.extend(primes);
    }
}

/// Sink that keeps only the number of primes it receives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrimeCount(pub usize);

impl PrimeSink for PrimeCount {
    type Item = usize;

    fn extend_primes<I: Iterator<Item = usize>>(&mut self, primes: I) {
        self.0 += primes.count();
    }
}
