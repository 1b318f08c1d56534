#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Geometry
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                MruCache (4 sets × 8 ways = 32 slots)             │
//! │                                                                  │
//! │  set 0: [ 0 ][ 4 ][ 8 ][12 ][16 ][20 ][24 ][28 ]   a mod 4 == 0  │
//! │  set 1: [ 1 ][ 5 ][ 9 ][ ...                   ]   a mod 4 == 1  │
//! │  set 2: [ 2 ][ 6 ][ ...                        ]   a mod 4 == 2  │
//! │  set 3: [ 3 ][ ...                             ]   a mod 4 == 3  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each slot holds a [`Line`]: the resident block and the logical clock value
//! of its last access. When a set is full, a miss overwrites the line with the
//! **greatest** stamp (Most Recently Used), the inverse of LRU.
//!
//! ## Quick Example
//!
//! ```rust
//! use setassoc_cache::MruCache;
//!
//! let mut cache = MruCache::new(1024).unwrap();
//!
//! // nine distinct blocks that all map to set 0
//! cache.replay((0..9).map(|i| i * 4));
//!
//! let stats = cache.statistics();
//! assert_eq!(stats.misses, 9);
//! assert_eq!(stats.hits, 0);
//!
//! // block 28 was loaded last before 32 arrived, so it was the victim
//! assert_eq!(
//!     cache.trace_lines().last().unwrap(),
//!     "Replaced block 28 with block 32 in set 0 (MRU replaced)"
//! );
//! ```
//!
//! ## Cost Model
//!
//! | Outcome | Time units |
//! |---------|------------|
//! | Hit     | 1          |
//! | Miss    | 101 (1 cache check + 100 backing store) |
//!
//! ## Modules
//!
//! - [`mru`]: the simulation engine
//! - [`set`]: fixed-capacity set and MRU victim selection
//! - [`entry`]: cache line type
//! - [`config`]: configuration structures
//! - [`metrics`]: counters, statistics and the `CacheMetrics` trait
//! - [`trace`]: trace events
//! - [`snapshot`]: point-in-time view of resident lines
//! - [`error`]: configuration errors

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Cache configuration structures.
pub mod config;

/// Configuration errors.
pub mod error;

/// Cache line type.
///
/// A line records a resident block address and the logical time it was
/// last touched.
pub mod entry;

/// Fixed-capacity cache set.
///
/// Holds up to `WAYS` lines in a fixed array and selects the MRU victim.
pub mod set;

/// Trace events produced by each access.
pub mod trace;

/// Snapshots of resident lines, grouped by set.
pub mod snapshot;

/// Cache metrics system.
///
/// Hit/miss counters, the fixed access-time cost model, and the
/// `CacheMetrics` reporting trait.
pub mod metrics;

/// Set-associative cache with Most Recently Used (MRU) replacement.
pub mod mru;

pub use config::MruCacheConfig;
pub use entry::Line;
pub use error::ConfigError;
pub use metrics::{CacheMetrics, Statistics};
pub use mru::{AccessOutcome, MruCache};
pub use snapshot::{CacheSnapshot, SetSnapshot};
pub use trace::TraceEvent;
