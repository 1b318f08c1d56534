//! Set-Associative Cache with Most Recently Used (MRU) Replacement
//!
//! This module provides the simulation engine: a fixed-geometry
//! set-associative cache that classifies each block address as a hit or a
//! miss, replaces lines with the MRU policy, and keeps counters and a
//! human-readable trace of every access.
//!
//! # Algorithm
//!
//! ```text
//! access(a):
//!   clock += 1
//!   a outside 0..total_blocks  -> trace "invalid", done
//!   set = a mod num_sets
//!   a resident in set          -> HIT: line.last_touched = clock
//!   set has a vacant slot      -> MISS: load a into it
//!   otherwise                  -> MISS: overwrite the line with the
//!                                 greatest last_touched (the MRU line)
//! ```
//!
//! MRU is the inverse of LRU: when a set is full, the line touched most
//! recently is the one that goes. It suits cyclic scans larger than the
//! cache, where the block just used is the one needed furthest in the
//! future.
//!
//! # Performance Characteristics
//!
//! - Access: O(WAYS) linear scan of one set
//! - Memory: `num_sets × WAYS` lines of 16 bytes, plus the trace
//!
//! # Thread Safety
//!
//! The engine is single-threaded and replays one address stream in order.
//! Concurrent runs should each own a separate `MruCache`.

extern crate alloc;

use crate::config::{MruCacheConfig, DEFAULT_WAYS};
use crate::entry::Line;
use crate::error::ConfigError;
use crate::metrics::{CacheMetrics, MruCacheMetrics, Statistics};
use crate::set::CacheSet;
use crate::snapshot::{CacheSnapshot, SetSnapshot};
use crate::trace::TraceEvent;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::{debug, trace};

/// Result of a single [`MruCache::access`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// Address out of range; nothing changed except the clock and trace.
    Invalid,
    /// Block was resident in `set` at `slot`.
    Hit {
        /// Set index.
        set: usize,
        /// Slot within the set.
        slot: usize,
    },
    /// Block was loaded into `set` at `slot`, evicting `evicted` if the set
    /// was full.
    Miss {
        /// Set index.
        set: usize,
        /// Slot within the set.
        slot: usize,
        /// Block overwritten by the load, if any.
        evicted: Option<i64>,
    },
}

impl AccessOutcome {
    /// Returns `true` for a hit.
    pub fn is_hit(&self) -> bool {
        matches!(self, AccessOutcome::Hit { .. })
    }

    /// Returns `true` for a miss.
    pub fn is_miss(&self) -> bool {
        matches!(self, AccessOutcome::Miss { .. })
    }
}

/// A set-associative cache simulator with MRU replacement.
///
/// `WAYS` is the associativity; the number of sets and the address-space
/// size come from [`MruCacheConfig`]. Defaults give 4 sets of 8 ways.
///
/// # Examples
///
/// ```
/// use setassoc_cache::MruCache;
///
/// let mut cache = MruCache::new(1024).unwrap();
///
/// cache.access(5);   // miss, loaded into set 1
/// cache.access(5);   // hit
/// cache.access(4096); // out of range, ignored by the counters
///
/// let stats = cache.statistics();
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.misses, 1);
/// assert_eq!(stats.total_memory_access_time, 102);
/// assert_eq!(cache.trace_lines()[1], "Loaded block 5 into set 1");
/// ```
#[derive(Debug, Clone)]
pub struct MruCache<const WAYS: usize = DEFAULT_WAYS> {
    config: MruCacheConfig,
    sets: Vec<CacheSet<WAYS>>,
    clock: u64,
    metrics: MruCacheMetrics,
    trace: Vec<TraceEvent>,
}

impl MruCache {
    /// Creates a cache with the default geometry (4 sets × 8 ways) over an
    /// address space of `total_blocks` blocks.
    pub fn new(total_blocks: i64) -> Result<Self, ConfigError> {
        Self::init(MruCacheConfig::with_total_blocks(total_blocks))
    }
}

impl<const WAYS: usize> MruCache<WAYS> {
    /// Creates an empty cache from `config`.
    ///
    /// Fails if the address space is not positive, or if there are no sets
    /// or no ways.
    pub fn init(config: MruCacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if WAYS == 0 {
            return Err(ConfigError::ZeroAssociativity);
        }

        let mut sets = Vec::with_capacity(config.num_sets);
        sets.resize_with(config.num_sets, CacheSet::new);

        debug!(
            "MRU cache initialised: {} sets x {} ways over {} blocks",
            config.num_sets, WAYS, config.total_blocks
        );

        Ok(Self {
            config,
            sets,
            clock: 0,
            metrics: MruCacheMetrics::new(),
            trace: Vec::new(),
        })
    }

    /// Size of the simulated address space.
    #[inline]
    pub fn total_blocks(&self) -> i64 {
        self.config.total_blocks
    }

    /// Number of sets.
    #[inline]
    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    /// Lines per set.
    #[inline]
    pub const fn ways(&self) -> usize {
        WAYS
    }

    /// Total number of slots across all sets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.sets.len() * WAYS
    }

    /// Number of resident lines.
    pub fn len(&self) -> usize {
        self.sets.iter().map(CacheSet::len).sum()
    }

    /// Returns `true` if no line is resident.
    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(CacheSet::is_empty)
    }

    /// Logical clock: the number of `access` calls so far, valid or not.
    #[inline]
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Cache hits so far.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.metrics.core.cache_hits
    }

    /// Cache misses so far.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.metrics.core.cache_misses
    }

    /// Out-of-range accesses so far.
    #[inline]
    pub fn invalid_accesses(&self) -> u64 {
        self.metrics.core.invalid_accesses
    }

    /// Replacements in full sets so far.
    #[inline]
    pub fn evictions(&self) -> u64 {
        self.metrics.core.evictions
    }

    /// Returns `true` if `address` lies in `0..total_blocks`.
    #[inline]
    pub fn is_valid(&self, address: i64) -> bool {
        (0..self.config.total_blocks).contains(&address)
    }

    /// Set an address maps to: `address mod num_sets`.
    #[inline]
    pub fn set_index(&self, address: i64) -> usize {
        address.rem_euclid(self.sets.len() as i64) as usize
    }

    /// Lines of one set, in slot order.
    pub fn set_lines(&self, index: usize) -> Option<&[Line]> {
        self.sets.get(index).map(CacheSet::lines)
    }

    /// Simulates one access to block `address`.
    pub fn access(&mut self, address: i64) -> AccessOutcome {
        self.clock += 1;
        let stamp = self.clock;

        if !self.is_valid(address) {
            debug!(
                "[{stamp}] block {address} outside 0..{}",
                self.config.total_blocks
            );
            self.metrics.core.record_invalid();
            self.trace.push(TraceEvent::InvalidAddress { address });
            return AccessOutcome::Invalid;
        }

        let index = self.set_index(address);
        let set = &mut self.sets[index];

        if let Some(slot) = set.find(address) {
            set.touch(slot, stamp);
            self.metrics.core.record_hit();
            self.trace.push(TraceEvent::Hit {
                address,
                set: index,
            });
            trace!("[{stamp}] block {address}: hit in set {index} slot {slot}");
            return AccessOutcome::Hit { set: index, slot };
        }

        self.metrics.core.record_miss();
        self.trace.push(TraceEvent::Miss {
            address,
            set: index,
        });
        trace!("[{stamp}] block {address}: miss in set {index}");

        if let Some(slot) = set.fill(address, stamp) {
            self.trace.push(TraceEvent::Loaded {
                address,
                set: index,
            });
            return AccessOutcome::Miss {
                set: index,
                slot,
                evicted: None,
            };
        }

        // full set and WAYS > 0, so a victim exists
        let Some(slot) = set.mru_victim() else {
            unreachable!("full set with no resident lines");
        };
        let evicted = set.replace(slot, address, stamp);
        self.metrics.core.record_eviction();
        self.trace.push(TraceEvent::Replaced {
            evicted,
            loaded: address,
            set: index,
        });
        debug!("[{stamp}] set {index}: replaced block {evicted} with block {address}");

        AccessOutcome::Miss {
            set: index,
            slot,
            evicted: Some(evicted),
        }
    }

    /// Feeds every address of `sequence` to [`access`](Self::access), in
    /// order.
    pub fn replay<I>(&mut self, sequence: I)
    where
        I: IntoIterator<Item = i64>,
    {
        for address in sequence {
            self.access(address);
        }
    }

    /// Aggregate hit/miss and timing statistics.
    pub fn statistics(&self) -> Statistics {
        self.metrics.core.statistics()
    }

    /// Copies the resident lines of every set.
    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            sets: self
                .sets
                .iter()
                .enumerate()
                .map(|(index, set)| SetSnapshot {
                    index,
                    lines: set.lines().to_vec(),
                })
                .collect(),
        }
    }

    /// Trace events in the order they happened.
    #[inline]
    pub fn trace(&self) -> &[TraceEvent] {
        &self.trace
    }

    /// Trace rendered as log lines.
    pub fn trace_lines(&self) -> Vec<String> {
        self.trace.iter().map(ToString::to_string).collect()
    }
}

impl<const WAYS: usize> CacheMetrics for MruCache<WAYS> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn make_cache() -> MruCache {
        MruCache::new(1024).unwrap()
    }

    #[test]
    fn test_mru_init_rejects_bad_config() {
        assert_eq!(
            MruCache::new(0).unwrap_err(),
            ConfigError::NonPositiveAddressSpace(0)
        );
        assert_eq!(
            MruCache::new(-7).unwrap_err(),
            ConfigError::NonPositiveAddressSpace(-7)
        );
        let zero_sets = MruCacheConfig {
            total_blocks: 16,
            num_sets: 0,
        };
        assert_eq!(
            MruCache::<8>::init(zero_sets).unwrap_err(),
            ConfigError::ZeroSets
        );
        assert_eq!(
            MruCache::<0>::init(MruCacheConfig::default()).unwrap_err(),
            ConfigError::ZeroAssociativity
        );
    }

    #[test]
    fn test_mru_fresh_cache() {
        let cache = make_cache();
        assert_eq!(cache.num_sets(), 4);
        assert_eq!(cache.ways(), 8);
        assert_eq!(cache.capacity(), 32);
        assert_eq!(cache.total_blocks(), 1024);
        assert!(cache.is_empty());
        assert_eq!(cache.clock(), 0);
        assert!(cache.trace().is_empty());
        assert_eq!(cache.snapshot().resident_lines(), 0);
        assert_eq!(cache.snapshot().sets.len(), 4);
    }

    #[test]
    fn test_mru_set_index() {
        let cache = make_cache();
        for address in 0..64 {
            assert_eq!(cache.set_index(address), (address % 4) as usize);
        }
    }

    #[test]
    fn test_mru_miss_then_hit() {
        let mut cache = make_cache();
        assert_eq!(
            cache.access(6),
            AccessOutcome::Miss {
                set: 2,
                slot: 0,
                evicted: None
            }
        );
        assert_eq!(cache.access(6), AccessOutcome::Hit { set: 2, slot: 0 });
        assert_eq!(cache.set_lines(2).unwrap(), &[Line::new(6, 2)]);
        assert_eq!(
            cache.trace_lines(),
            vec![
                "Access block 6: MISS in set 2",
                "Loaded block 6 into set 2",
                "Access block 6: HIT in set 2",
            ]
        );
    }

    #[test]
    fn test_mru_invalid_addresses() {
        let mut cache = make_cache();
        assert_eq!(cache.access(-1), AccessOutcome::Invalid);
        assert_eq!(cache.access(1024), AccessOutcome::Invalid);
        assert_eq!(cache.clock(), 2);
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 0);
        assert_eq!(cache.invalid_accesses(), 2);
        assert!(cache.is_empty());
        assert_eq!(
            cache.trace(),
            &[
                TraceEvent::InvalidAddress { address: -1 },
                TraceEvent::InvalidAddress { address: 1024 },
            ]
        );

        // the clock still advanced, so the next stamp is 3
        cache.access(1023);
        assert_eq!(cache.set_lines(3).unwrap(), &[Line::new(1023, 3)]);
    }

    #[test]
    fn test_mru_evicts_most_recent_line() {
        let mut cache = make_cache();
        cache.replay((0..8).map(|i| i * 4));
        // refresh block 8: it becomes the MRU line of set 0
        assert!(cache.access(8).is_hit());

        let outcome = cache.access(100);
        assert_eq!(
            outcome,
            AccessOutcome::Miss {
                set: 0,
                slot: 2,
                evicted: Some(8)
            }
        );
        assert_eq!(cache.set_lines(0).unwrap()[2], Line::new(100, 10));
        assert_eq!(cache.evictions(), 1);
        assert_eq!(
            cache.trace().last(),
            Some(&TraceEvent::Replaced {
                evicted: 8,
                loaded: 100,
                set: 0
            })
        );
    }

    #[test]
    fn test_mru_back_to_back_misses_reuse_slot() {
        let mut cache = make_cache();
        cache.replay((0..8).map(|i| i * 4));
        // each new block lands in the slot of the previous one
        cache.replay([32, 36, 40]);
        let blocks: Vec<i64> = cache
            .set_lines(0)
            .unwrap()
            .iter()
            .map(Line::block)
            .collect();
        assert_eq!(blocks, vec![0, 4, 8, 12, 16, 20, 24, 40]);
        assert_eq!(cache.evictions(), 3);
    }

    #[test]
    fn test_mru_small_geometry() {
        let config = MruCacheConfig {
            total_blocks: 16,
            num_sets: 1,
        };
        let mut cache = MruCache::<2>::init(config).unwrap();
        cache.replay([1, 2, 1, 3]);
        // 1 was touched at clock 3, so 3 replaces it
        let blocks: Vec<i64> = cache
            .set_lines(0)
            .unwrap()
            .iter()
            .map(Line::block)
            .collect();
        assert_eq!(blocks, vec![3, 2]);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 3);
    }

    #[test]
    fn test_mru_metrics_trait() {
        let mut cache = make_cache();
        cache.replay([0, 0, 0, 1, 1]);
        let metrics = cache.metrics();
        assert_eq!(metrics["cache_hits"], 3.0);
        assert_eq!(metrics["cache_misses"], 2.0);
        assert_eq!(metrics["total_memory_access_time"], 205.0);
        assert_eq!(metrics["average_memory_access_time"], 41.0);
        assert_eq!(cache.algorithm_name(), "MRU");
    }
}
