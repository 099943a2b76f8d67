//! Reference table of the primes below 2<sup>16</sup>, generated in `build.rs`
//! by trial division. Also includes a mapping from `k` to the number of primes
//! below 2<sup>k</sup>.

include!(concat!(env!("OUT_DIR"), "/table.rs"));

/// Exclusive upper limit covered by [`PRIMES`].
pub const LIMIT: usize = 1 << 16;

/// Number of primes below `n`.
///
/// - `n` must be at most [`LIMIT`]
pub fn prime_pi(n: usize) -> usize {
    debug_assert!(n <= LIMIT, "`n` outside the table, {n} > {LIMIT}");
    PRIMES.partition_point(|&p| (p as usize) < n)
}

/// All primes below `n`, ascending.
pub fn primes_below(n: usize) -> &'static [u32] {
    &PRIMES[..prime_pi(n)]
}
