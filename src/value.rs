//! Unsigned integer types the sieve can emit into.

use numext_fixed_uint::{U1024, U2048, U256, U512};

/// An unsigned integer type that primes can be written as.
pub trait PrimeValue: Sized {
    /// Largest sieve index representable in `Self`.
    const MAX_INDEX: usize;

    /// Converts a sieve index. `index` is at most [`Self::MAX_INDEX`].
    fn from_index(index: usize) -> Self;
}

macro_rules! impl_prime_value_primitive {
    ($($t:ty),*) => {$(
        impl PrimeValue for $t {
            const MAX_INDEX: usize = if (<$t>::MAX as u128) < usize::MAX as u128 {
                <$t>::MAX as usize
            } else {
                usize::MAX
            };

            #[inline]
            fn from_index(index: usize) -> Self {
                index as $t
            }
        }
    )*};
}

impl_prime_value_primitive!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_prime_value_fixed {
    ($($t:ty),*) => {$(
        impl PrimeValue for $t {
            const MAX_INDEX: usize = usize::MAX;

            #[inline]
            fn from_index(index: usize) -> Self {
                <$t>::from(index as u64)
            }
        }
    )*};
}

impl_prime_value_fixed!(U256, U512, U1024, U2048);

/// Whether every index below `bound` fits in `T`.
pub const fn fits<T: PrimeValue>(bound: usize) -> bool {
    bound == 0 || bound - 1 <= T::MAX_INDEX
}
