//! Cache Metrics System
//!
//! Counters and derived statistics for the cache engine, reported both as a
//! typed [`Statistics`] record and as a `BTreeMap<String, f64>` through the
//! [`CacheMetrics`] trait.
//!
//! BTreeMap keeps metric keys in a deterministic order, so reports and CSV
//! exports compare cleanly across runs.
//!
//! # Cost Model
//!
//! Access time is charged in abstract time units:
//!
//! ```text
//! hit  = HIT_TIME                  = 1
//! miss = HIT_TIME + MISS_PENALTY   = 1 + 100 = 101
//! ```

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt;

pub mod mru;

pub use mru::MruCacheMetrics;

/// Time units charged for checking the cache.
pub const HIT_TIME: u64 = 1;

/// Extra time units charged for going to the backing store on a miss.
pub const MISS_PENALTY: u64 = 100;

/// Total time units charged for a miss.
pub const MISS_TIME: u64 = HIT_TIME + MISS_PENALTY;

/// Counters tracked by the cache engine.
///
/// Only in-range accesses count toward `hits` and `misses`; out-of-range
/// accesses are tallied separately in `invalid_accesses`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Accesses that found their block resident.
    pub cache_hits: u64,

    /// Accesses that had to load their block.
    pub cache_misses: u64,

    /// Accesses rejected because the address was out of range.
    pub invalid_accesses: u64,

    /// Misses that overwrote a resident line.
    pub evictions: u64,
}

impl CoreCacheMetrics {
    /// Creates zeroed metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cache hit.
    pub fn record_hit(&mut self) {
        self.cache_hits += 1;
    }

    /// Records a cache miss.
    pub fn record_miss(&mut self) {
        self.cache_misses += 1;
    }

    /// Records an out-of-range access.
    pub fn record_invalid(&mut self) {
        self.invalid_accesses += 1;
    }

    /// Records a replacement in a full set.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Hits plus misses. Invalid accesses are excluded.
    pub fn total_accesses(&self) -> u64 {
        self.cache_hits + self.cache_misses
    }

    /// Fraction of valid accesses that hit, or 0.0 before any access.
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_accesses();
        if total > 0 {
            self.cache_hits as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Fraction of valid accesses that missed, or 0.0 before any access.
    pub fn miss_rate(&self) -> f64 {
        let total = self.total_accesses();
        if total > 0 {
            self.cache_misses as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Total time units under the fixed cost model.
    pub fn total_memory_access_time(&self) -> u64 {
        self.cache_hits * HIT_TIME + self.cache_misses * MISS_TIME
    }

    /// Mean time units per valid access, or 0.0 before any access.
    pub fn average_memory_access_time(&self) -> f64 {
        let total = self.total_accesses();
        if total > 0 {
            self.total_memory_access_time() as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Freezes the current counters into a [`Statistics`] record.
    pub fn statistics(&self) -> Statistics {
        Statistics {
            total_accesses: self.total_accesses(),
            hits: self.cache_hits,
            misses: self.cache_misses,
            hit_rate: self.hit_rate(),
            miss_rate: self.miss_rate(),
            total_memory_access_time: self.total_memory_access_time(),
            average_memory_access_time: self.average_memory_access_time(),
        }
    }

    /// Convert core metrics to BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert(
            "invalid_accesses".to_string(),
            self.invalid_accesses as f64,
        );
        metrics.insert("total_accesses".to_string(), self.total_accesses() as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics.insert(
            "total_memory_access_time".to_string(),
            self.total_memory_access_time() as f64,
        );
        metrics.insert(
            "average_memory_access_time".to_string(),
            self.average_memory_access_time(),
        );

        metrics
    }
}

/// Aggregate results of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Valid accesses (hits + misses).
    pub total_accesses: u64,
    /// Cache hits.
    pub hits: u64,
    /// Cache misses.
    pub misses: u64,
    /// `hits / total_accesses`, 0.0 when there were none.
    pub hit_rate: f64,
    /// `misses / total_accesses`, 0.0 when there were none.
    pub miss_rate: f64,
    /// `hits * 1 + misses * 101`.
    pub total_memory_access_time: u64,
    /// `total_memory_access_time / total_accesses`, 0.0 when there were none.
    pub average_memory_access_time: f64,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Accesses: {}", self.total_accesses)?;
        writeln!(f, "Hits: {}", self.hits)?;
        writeln!(f, "Misses: {}", self.misses)?;
        writeln!(f, "Hit Rate: {:.4}", self.hit_rate)?;
        writeln!(f, "Miss Rate: {:.4}", self.miss_rate)?;
        writeln!(
            f,
            "Total Memory Access Time: {}",
            self.total_memory_access_time
        )?;
        write!(
            f,
            "Average Memory Access Time: {:.4}",
            self.average_memory_access_time
        )
    }
}

/// Trait that cache engines implement for metrics reporting
///
/// The BTreeMap keeps keys sorted so output is reproducible.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. "MRU")
    fn algorithm_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_counts(hits: u64, misses: u64) -> CoreCacheMetrics {
        CoreCacheMetrics {
            cache_hits: hits,
            cache_misses: misses,
            ..CoreCacheMetrics::default()
        }
    }

    #[test]
    fn test_cost_model_arithmetic() {
        let metrics = with_counts(3, 2);
        assert_eq!(metrics.total_accesses(), 5);
        assert_eq!(metrics.total_memory_access_time(), 205);
        assert_eq!(metrics.average_memory_access_time(), 41.0);
        assert_eq!(metrics.hit_rate(), 0.6);
        assert_eq!(metrics.miss_rate(), 0.4);
    }

    #[test]
    fn test_empty_metrics_report_zero_rates() {
        let stats = CoreCacheMetrics::new().statistics();
        assert_eq!(stats.total_accesses, 0);
        assert_eq!(stats.hit_rate, 0.0);
        assert_eq!(stats.miss_rate, 0.0);
        assert_eq!(stats.total_memory_access_time, 0);
        assert_eq!(stats.average_memory_access_time, 0.0);
    }

    #[test]
    fn test_invalid_accesses_excluded_from_total() {
        let mut metrics = with_counts(1, 1);
        metrics.record_invalid();
        metrics.record_invalid();
        assert_eq!(metrics.total_accesses(), 2);
        assert_eq!(metrics.invalid_accesses, 2);
        assert_eq!(metrics.average_memory_access_time(), 51.0);
    }

    #[test]
    fn test_to_btreemap_keys() {
        let mut metrics = with_counts(3, 2);
        metrics.record_eviction();
        let map = metrics.to_btreemap();
        let keys: alloc::vec::Vec<&str> = map.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "average_memory_access_time",
                "cache_hits",
                "cache_misses",
                "evictions",
                "hit_rate",
                "invalid_accesses",
                "miss_rate",
                "total_accesses",
                "total_memory_access_time",
            ]
        );
        assert_eq!(map["total_memory_access_time"], 205.0);
        assert_eq!(map["evictions"], 1.0);
    }

    #[test]
    fn test_statistics_display() {
        let text = alloc::format!("{}", with_counts(3, 2).statistics());
        assert_eq!(
            text,
            "Total Accesses: 5\nHits: 3\nMisses: 2\nHit Rate: 0.6000\nMiss Rate: 0.4000\n\
             Total Memory Access Time: 205\nAverage Memory Access Time: 41.0000"
        );
    }
}
