//! Fixed-capacity cache set.
//!
//! A [`CacheSet`] is a `WAYS`-slot array plus an occupied count. Slots
//! `0..len` hold resident lines; the rest are vacant. Lines are appended on
//! a cold miss and overwritten in place on eviction, so the slot order is
//! stable for the life of the set and the capacity bound holds by
//! construction.
//!
//! # Victim Selection
//!
//! [`CacheSet::mru_victim`] returns the slot whose line has the greatest
//! `last_touched` stamp, scanning slots in ascending order and keeping the
//! first maximum. The engine stamps every access with a strictly increasing
//! logical clock, so two resident lines never share a stamp; debug builds
//! assert this.

use crate::entry::Line;

/// A set of at most `WAYS` lines with pairwise distinct block addresses.
#[derive(Debug, Clone)]
pub struct CacheSet<const WAYS: usize> {
    slots: [Line; WAYS],
    len: usize,
}

impl<const WAYS: usize> CacheSet<WAYS> {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self {
            slots: [Line::VACANT; WAYS],
            len: 0,
        }
    }

    /// Number of resident lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no line is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == WAYS
    }

    /// Maximum number of lines (the associativity).
    #[inline]
    pub const fn capacity(&self) -> usize {
        WAYS
    }

    /// Resident lines in slot order.
    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.slots[..self.len]
    }

    /// Slot holding `block`, if resident.
    pub fn find(&self, block: i64) -> Option<usize> {
        self.lines().iter().position(|line| line.block() == block)
    }

    /// Refreshes the stamp of the line in `slot`.
    pub(crate) fn touch(&mut self, slot: usize, stamp: u64) {
        debug_assert!(slot < self.len);
        self.slots[slot].touch(stamp);
    }

    /// Loads `block` into the next vacant slot.
    ///
    /// Returns the slot used, or `None` if the set is full.
    pub(crate) fn fill(&mut self, block: i64, stamp: u64) -> Option<usize> {
        debug_assert!(self.find(block).is_none(), "block {block} already resident");
        if self.is_full() {
            return None;
        }
        let slot = self.len;
        self.slots[slot] = Line::new(block, stamp);
        self.len += 1;
        Some(slot)
    }

    /// Slot of the most recently touched line, or `None` if empty.
    pub fn mru_victim(&self) -> Option<usize> {
        let mut victim: Option<(usize, u64)> = None;
        for (slot, line) in self.lines().iter().enumerate() {
            match victim {
                Some((_, best)) if line.last_touched() <= best => {
                    debug_assert!(
                        line.last_touched() != best,
                        "two resident lines share stamp {best}"
                    );
                }
                _ => victim = Some((slot, line.last_touched())),
            }
        }
        victim.map(|(slot, _)| slot)
    }

    /// Overwrites the line in `slot` with `block`, returning the evicted block.
    pub(crate) fn replace(&mut self, slot: usize, block: i64, stamp: u64) -> i64 {
        debug_assert!(slot < self.len);
        debug_assert!(self.find(block).is_none(), "block {block} already resident");
        self.slots[slot].overwrite(block, stamp)
    }
}

impl<const WAYS: usize> Default for CacheSet<WAYS> {
    fn default() -> Self {
        Self::new()
    }
}
