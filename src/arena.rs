//! Fixed-capacity byte arena.
//!
//! [`BoundedArena`] owns one zero-filled region, allocated once. Blocks are
//! carved from the free tail and handed out as [`ArenaBlock`] guards, which
//! give the bytes back (zeroed again) when dropped. Because the free region
//! is always zero, a fresh block never needs an initializing write.

use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::ArenaError;

/// Single-owner bump arena with a hard capacity.
#[derive(Debug)]
pub struct BoundedArena {
    region: Box<[u8]>,
    in_use: usize,
}

impl BoundedArena {
    /// Creates an arena holding exactly `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            region: vec![0; capacity].into_boxed_slice(),
            in_use: 0,
        }
    }

    /// Total size of the region in bytes.
    pub fn capacity(&self) -> usize {
        self.region.len()
    }

    /// Bytes currently held by live blocks.
    pub fn in_use(&self) -> usize {
        self.in_use
    }

    /// Bytes that can still be allocated.
    pub fn available(&self) -> usize {
        self.capacity() - self.in_use
    }

    /// Carves `len` zeroed bytes from the arena.
    ///
    /// The block borrows the arena mutably, so it must be dropped before the
    /// arena can be used again.
    pub fn allocate(&mut self, len: usize) -> Result<ArenaBlock<'_>, ArenaError> {
        let available = self.available();
        if len > available {
            trace!(requested = len, available, "arena allocation refused");
            return Err(ArenaError::CapacityExceeded {
                requested: len,
                available,
            });
        }

        let start = self.in_use;
        self.in_use += len;
        trace!(offset = start, len, "arena block allocated");

        Ok(ArenaBlock {
            bytes: &mut self.region[start..start + len],
            in_use: &mut self.in_use,
        })
    }
}

/// Bytes borrowed from a [`BoundedArena`]; released on drop.
#[derive(Debug)]
pub struct ArenaBlock<'a> {
    bytes: &'a mut [u8],
    in_use: &'a mut usize,
}

impl Deref for ArenaBlock<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

impl DerefMut for ArenaBlock<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.bytes
    }
}

impl Drop for ArenaBlock<'_> {
    fn drop(&mut self) {
        // the free tail must stay zeroed
        self.bytes.fill(0);
        *self.in_use -= self.bytes.len();
        trace!(len = self.bytes.len(), "arena block released");
    }
}
