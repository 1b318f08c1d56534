//! Point-in-time view of cache contents.
//!
//! [`MruCache::snapshot`](crate::MruCache::snapshot) copies the resident
//! lines of every set into a [`CacheSnapshot`]. The snapshot owns its data,
//! so callers can keep or render it after the cache moves on.

extern crate alloc;

use crate::entry::Line;
use alloc::vec::Vec;
use core::fmt;

/// Resident lines of one set, in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSnapshot {
    /// Set index.
    pub index: usize,
    /// Resident lines.
    pub lines: Vec<Line>,
}

impl SetSnapshot {
    /// Returns `true` if `block` is resident in this set.
    pub fn contains(&self, block: i64) -> bool {
        self.lines.iter().any(|line| line.block() == block)
    }
}

/// Resident lines of every set, ordered by set index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheSnapshot {
    /// One entry per set, index ascending.
    pub sets: Vec<SetSnapshot>,
}

impl CacheSnapshot {
    /// Snapshot of a single set.
    pub fn set(&self, index: usize) -> Option<&SetSnapshot> {
        self.sets.get(index)
    }

    /// Total number of resident lines.
    pub fn resident_lines(&self) -> usize {
        self.sets.iter().map(|set| set.lines.len()).sum()
    }

    /// Returns `true` if `block` is resident in any set.
    pub fn contains(&self, block: i64) -> bool {
        self.sets.iter().any(|set| set.contains(block))
    }
}

impl fmt::Display for CacheSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for set in &self.sets {
            writeln!(f, "Set {}:", set.index)?;
            for line in &set.lines {
                writeln!(
                    f,
                    "  Block: {}, Last Access: {}",
                    line.block(),
                    line.last_touched()
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn sample() -> CacheSnapshot {
        CacheSnapshot {
            sets: vec![
                SetSnapshot {
                    index: 0,
                    lines: vec![Line::new(0, 1), Line::new(4, 5)],
                },
                SetSnapshot {
                    index: 1,
                    lines: Vec::new(),
                },
            ],
        }
    }

    #[test]
    fn test_snapshot_rendering() {
        assert_eq!(
            sample().to_string(),
            "Set 0:\n  Block: 0, Last Access: 1\n  Block: 4, Last Access: 5\nSet 1:\n"
        );
    }

    #[test]
    fn test_snapshot_queries() {
        let snapshot = sample();
        assert_eq!(snapshot.resident_lines(), 2);
        assert!(snapshot.contains(4));
        assert!(!snapshot.contains(1));
        assert!(snapshot.set(1).unwrap().lines.is_empty());
        assert!(snapshot.set(2).is_none());
    }
}
