//! Cache Line Type
//!
//! A [`Line`] is the only per-entry state the simulator keeps: which block
//! is resident and when it was last touched. No payload is stored.
//!
//! Lines live inside the fixed slot array of a
//! [`CacheSet`](crate::set::CacheSet) and are never removed. A hit refreshes
//! the stamp in place; an eviction overwrites both fields in place.
//!
//! # Memory Layout
//!
//! - `block: i64` - 8 bytes
//! - `last_touched: u64` - 8 bytes (logical clock value, not wall time)

/// A resident block and the logical time it was last accessed.
///
/// # Examples
///
/// ```
/// use setassoc_cache::entry::Line;
///
/// let line = Line::new(42, 7);
/// assert_eq!(line.block(), 42);
/// assert_eq!(line.last_touched(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    block: i64,
    last_touched: u64,
}

impl Line {
    /// Placeholder used for unoccupied slots.
    pub(crate) const VACANT: Line = Line {
        block: 0,
        last_touched: 0,
    };

    /// Creates a line holding `block`, stamped with `stamp`.
    pub const fn new(block: i64, stamp: u64) -> Self {
        Self {
            block,
            last_touched: stamp,
        }
    }

    /// The resident block address.
    #[inline]
    pub const fn block(&self) -> i64 {
        self.block
    }

    /// Logical clock value of the most recent access to this line.
    #[inline]
    pub const fn last_touched(&self) -> u64 {
        self.last_touched
    }

    /// Refreshes the recency stamp after a hit.
    #[inline]
    pub(crate) fn touch(&mut self, stamp: u64) {
        debug_assert!(stamp >= self.last_touched);
        self.last_touched = stamp;
    }

    /// Overwrites the line with a new block, returning the evicted block.
    #[inline]
    pub(crate) fn overwrite(&mut self, block: i64, stamp: u64) -> i64 {
        let evicted = self.block;
        self.block = block;
        self.last_touched = stamp;
        evicted
    }
}
