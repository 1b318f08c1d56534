//! Cache Configuration Module
//!
//! Configuration structures for the cache engine. Like the rest of the
//! crate's configs, they have public fields and are built with a struct
//! literal; validation happens when the cache is constructed.
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `MruCacheConfig` | [`MruCache`](crate::MruCache) | Set-associative, Most Recently Used replacement |
//!
//! # Examples
//!
//! ```
//! use setassoc_cache::config::MruCacheConfig;
//! use setassoc_cache::MruCache;
//!
//! let config = MruCacheConfig {
//!     total_blocks: 2048,
//!     num_sets: 4,
//! };
//!
//! let cache: MruCache = MruCache::init(config).unwrap();
//! assert_eq!(cache.capacity(), 32);
//! ```

pub mod mru;

pub use mru::{MruCacheConfig, DEFAULT_NUM_SETS, DEFAULT_TOTAL_BLOCKS, DEFAULT_WAYS};
