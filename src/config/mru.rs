//! Configuration for the set-associative MRU cache.
//!
//! # Geometry
//!
//! The cache is made of `num_sets` independent sets, each holding up to
//! `WAYS` lines, where `WAYS` is the const generic parameter of
//! [`MruCache`](crate::MruCache) (8 unless stated otherwise). A block address
//! `a` always lives in set `a mod num_sets`.
//!
//! ```text
//! capacity (slots) = num_sets × WAYS = 4 × 8 = 32 by default
//! ```
//!
//! `total_blocks` bounds the simulated backing store: valid addresses are
//! `0..total_blocks`. Anything else is traced as invalid and skipped.
//!
//! # Examples
//!
//! ```
//! use setassoc_cache::config::MruCacheConfig;
//!
//! let config = MruCacheConfig::default();
//! assert_eq!(config.total_blocks, 1024);
//! assert_eq!(config.num_sets, 4);
//!
//! let bigger = MruCacheConfig::with_total_blocks(4096);
//! assert_eq!(bigger.num_sets, 4);
//! ```

use crate::error::ConfigError;
use core::fmt;

/// Default size of the simulated address space, in blocks.
pub const DEFAULT_TOTAL_BLOCKS: i64 = 1024;

/// Default number of sets.
pub const DEFAULT_NUM_SETS: usize = 4;

/// Default associativity (lines per set).
pub const DEFAULT_WAYS: usize = 8;

/// Configuration for a set-associative cache with MRU replacement.
///
/// # Fields
///
/// - `total_blocks`: exclusive upper bound on valid block addresses. Must be
///   positive; any stricter minimum is up to the caller.
/// - `num_sets`: number of sets the address space is folded onto. Must be
///   positive.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MruCacheConfig {
    /// Number of blocks in the simulated address space.
    pub total_blocks: i64,
    /// Number of sets (`address mod num_sets` selects the set).
    pub num_sets: usize,
}

impl MruCacheConfig {
    /// Default geometry over an address space of `total_blocks` blocks.
    pub fn with_total_blocks(total_blocks: i64) -> Self {
        Self {
            total_blocks,
            ..Self::default()
        }
    }

    /// Checks the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_blocks <= 0 {
            return Err(ConfigError::NonPositiveAddressSpace(self.total_blocks));
        }
        if self.num_sets == 0 {
            return Err(ConfigError::ZeroSets);
        }
        Ok(())
    }
}

impl Default for MruCacheConfig {
    fn default() -> Self {
        Self {
            total_blocks: DEFAULT_TOTAL_BLOCKS,
            num_sets: DEFAULT_NUM_SETS,
        }
    }
}

impl fmt::Debug for MruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MruCacheConfig")
            .field("total_blocks", &self.total_blocks)
            .field("num_sets", &self.num_sets)
            .finish()
    }
}
