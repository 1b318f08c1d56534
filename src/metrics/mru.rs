//! MRU Cache Metrics
//!
//! Metrics for the set-associative MRU cache.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;

/// MRU-specific metrics (extends CoreCacheMetrics)
///
/// MRU has no counters beyond the core set, but keeps its own type so the
/// reported algorithm name travels with the metrics.
#[derive(Debug, Clone, Default)]
pub struct MruCacheMetrics {
    /// Core metrics common to all cache algorithms
    pub core: CoreCacheMetrics,
}

impl MruCacheMetrics {
    /// Creates zeroed MRU metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts MRU metrics to a BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        self.core.to_btreemap()
    }
}

impl CacheMetrics for MruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "MRU"
    }
}
