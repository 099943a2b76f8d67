//! Dense bit arrays backing the sieve.
//!
//! A set bit means "excluded". Both stores start all-zero, which matches the
//! freshly zeroed memory they are built on.

use crate::arena::{ArenaBlock, BoundedArena};
use crate::ArenaError;

/// Fixed-size array of bits indexed by `0..size()`.
pub trait BitStore {
    /// Whether bit `i` is set.
    fn test(&self, i: usize) -> bool;
    /// Sets bit `i`. Setting an already set bit is a no-op.
    fn set(&mut self, i: usize);
    /// Number of addressable bits.
    fn size(&self) -> usize;
}

/// Bytes needed to hold `bits` bits.
pub const fn bytes_for(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Bit array on the global heap, packed into `u64` words.
#[derive(Clone, Debug)]
pub struct HeapBitSet {
    words: Vec<u64>,
    bits: usize,
}

impl HeapBitSet {
    /// Creates `bits` cleared bits.
    pub fn new(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(u64::BITS as usize)],
            bits,
        }
    }

    #[cfg(test)]
    fn count_set(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

impl BitStore for HeapBitSet {
    #[inline]
    fn test(&self, i: usize) -> bool {
        debug_assert!(i < self.bits, "bit {i} out of range {}", self.bits);
        self.words[i / 64] >> (i % 64) & 1 == 1
    }

    #[inline]
    fn set(&mut self, i: usize) {
        debug_assert!(i < self.bits, "bit {i} out of range {}", self.bits);
        self.words[i / 64] |= 1 << (i % 64);
    }

    fn size(&self) -> usize {
        self.bits
    }
}

/// Bit array whose bytes are carved from a [`BoundedArena`].
///
/// The storage goes back to the arena when this is dropped.
#[derive(Debug)]
pub struct ArenaBitSet<'a> {
    block: ArenaBlock<'a>,
    bits: usize,
}

impl<'a> ArenaBitSet<'a> {
    /// Allocates [`bytes_for(bits)`](bytes_for) cleared bytes from `arena`.
    pub fn new_in(arena: &'a mut BoundedArena, bits: usize) -> Result<Self, ArenaError> {
        let block = arena.allocate(bytes_for(bits))?;
        Ok(Self { block, bits })
    }

    #[cfg(test)]
    fn count_set(&self) -> usize {
        self.block.iter().map(|b| b.count_ones() as usize).sum()
    }
}

impl BitStore for ArenaBitSet<'_> {
    #[inline]
    fn test(&self, i: usize) -> bool {
        debug_assert!(i < self.bits, "bit {i} out of range {}", self.bits);
        self.block[i / 8] >> (i % 8) & 1 == 1
    }

    #[inline]
    fn set(&mut self, i: usize) {
        debug_assert!(i < self.bits, "bit {i} out of range {}", self.bits);
        self.block[i / 8] |= 1 << (i % 8);
    }

    fn size(&self) -> usize {
        self.bits
    }
}
