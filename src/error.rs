//! Error types for the arena and the sieve.

use thiserror::Error;

/// Errors reported by [`BoundedArena`](crate::BoundedArena).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// The free tail of the arena is smaller than the requested block.
    #[error("arena capacity exceeded: requested {requested} bytes, {available} available")]
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes still free when the request was made.
        available: usize,
    },
}

/// Errors reported by the runtime-bound sieve entry points.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SieveError {
    /// The bit array could not be carved from the arena.
    #[error(transparent)]
    Arena(#[from] ArenaError),
    /// The output element type cannot hold `bound - 1`.
    #[error("output type `{type_name}` cannot hold values below {bound}")]
    ValueOutOfRange {
        /// Exclusive upper bound of the sieve.
        bound: usize,
        /// Name of the rejected element type.
        type_name: &'static str,
    },
}
