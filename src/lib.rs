//! Prime enumeration with a memory-lean Sieve of Eratosthenes, and an
//! asymptotic estimate of the logarithmic integral li(x) for bounding π(x).
//!
//! The sieve marks composites in a bit-packed array where a set bit means
//! "excluded", so the zeroed memory it is built on is already the initial
//! state. The array lives either on the heap ([`sieve_primes`]) or in a
//! caller-supplied [`BoundedArena`] ([`sieve_primes_in`]), which keeps it off
//! the global allocator entirely.
//!
//! ```
//! use prime_sieve::{li_asym, sieve_primes_in, BoundedArena};
//!
//! let mut arena = BoundedArena::with_capacity(128);
//! let mut primes: Vec<u16> = vec![];
//! sieve_primes_in::<1000>(&mut arena, &mut primes).unwrap();
//! assert_eq!(primes.len(), 168);
//!
//! // li(x) overshoots π(x) by a shrinking margin
//! assert!((li_asym(1000.0) - 168.0) < 11.0);
//! ```

mod arena;
mod bitset;
mod error;
mod li;
mod sieve;
mod sink;
mod value;

pub use arena::{ArenaBlock, BoundedArena};
pub use bitset::{bytes_for, ArenaBitSet, BitStore, HeapBitSet};
pub use error::{ArenaError, SieveError};
pub use li::{li_asym, li_asym_f64, prime_count_bound};
pub use sieve::{
    primes_below, sieve_bound, sieve_primes, sieve_primes_below, sieve_primes_below_in,
    sieve_primes_in,
};
pub use sink::{PrimeCount, PrimeSink};
pub use value::{fits, PrimeValue};
