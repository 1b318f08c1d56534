//! Simulation runner
//!
//! Builds the address stream for a run, enforces the simulator's input
//! policy, replays the stream through a freshly constructed MRU cache and
//! collects the trace, snapshot and statistics into a `SimulationResult`.
//!
//! The engine itself only rejects a non-positive address space. The
//! 1024-block minimum and the positive pattern size are simulator policy
//! and are checked here before the engine is built.

use std::fmt;
use std::time::Instant;

use log::{debug, info};
use setassoc_cache::config::MruCacheConfig;
use setassoc_cache::{ConfigError, MruCache};

use crate::generator::make_rng;
use crate::input::{AddressReader, TraceParseError};
use crate::models::{SimulationConfig, SimulationResult, StreamSource, MIN_TOTAL_BLOCKS};

/// Reasons a run cannot start
#[derive(Debug)]
pub enum SimulationError {
    /// Address space below the simulator's minimum
    TotalBlocksTooSmall { total_blocks: i64, min: i64 },
    /// Pattern size parameter was zero
    ZeroPatternSize,
    /// Engine rejected its configuration
    Config(ConfigError),
    /// Trace file could not be read
    Input(TraceParseError),
    /// Nothing to replay
    EmptyStream,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::TotalBlocksTooSmall { total_blocks, min } => write!(
                f,
                "input error: total memory blocks must be at least {min}, got {total_blocks}"
            ),
            SimulationError::ZeroPatternSize => {
                write!(f, "input error: pattern size n must be positive")
            }
            SimulationError::Config(err) => write!(f, "{err}"),
            SimulationError::Input(err) => write!(f, "{err}"),
            SimulationError::EmptyStream => write!(f, "no addresses to replay"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Config(err) => Some(err),
            SimulationError::Input(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(err: ConfigError) -> Self {
        SimulationError::Config(err)
    }
}

impl From<TraceParseError> for SimulationError {
    fn from(err: TraceParseError) -> Self {
        SimulationError::Input(err)
    }
}

/// Runner for cache simulations
#[derive(Debug)]
pub struct SimulationRunner {
    config: SimulationConfig,
}

impl SimulationRunner {
    /// Create a new simulation runner
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Check the simulator's input policy
    fn validate(&self) -> Result<(), SimulationError> {
        if self.config.total_blocks < MIN_TOTAL_BLOCKS {
            return Err(SimulationError::TotalBlocksTooSmall {
                total_blocks: self.config.total_blocks,
                min: MIN_TOTAL_BLOCKS,
            });
        }
        if matches!(self.config.source, StreamSource::Pattern(_)) && self.config.n == 0 {
            return Err(SimulationError::ZeroPatternSize);
        }
        Ok(())
    }

    /// Build the address stream for this run
    pub fn address_stream(&self) -> Result<Vec<i64>, SimulationError> {
        let stream = match &self.config.source {
            StreamSource::Pattern(pattern) => {
                let mut rng = make_rng(self.config.seed);
                pattern.generate(self.config.n, self.config.total_blocks, &mut rng)
            }
            StreamSource::File(path) => AddressReader::new(path).read_addresses()?,
        };

        if stream.is_empty() {
            return Err(SimulationError::EmptyStream);
        }
        Ok(stream)
    }

    /// Run the simulation.
    ///
    /// Every call builds a new cache, so repeated runs never share state.
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        self.validate()?;

        let mut cache: MruCache = MruCache::init(MruCacheConfig {
            total_blocks: self.config.total_blocks,
            num_sets: self.config.num_sets,
        })?;

        let stream = self.address_stream()?;
        info!(
            "replaying {} addresses ({}) over {} blocks",
            stream.len(),
            self.config.source,
            self.config.total_blocks
        );

        let start = Instant::now();
        cache.replay(stream.iter().copied());
        let duration = start.elapsed();

        debug!(
            "replay finished in {:.2?}: {} hits, {} misses, {} evictions",
            duration,
            cache.hits(),
            cache.misses(),
            cache.evictions()
        );

        Ok(SimulationResult {
            source: self.config.source.to_string(),
            total_blocks: self.config.total_blocks,
            stream_len: stream.len(),
            trace: cache.trace().to_vec(),
            snapshot: cache.snapshot(),
            statistics: cache.statistics(),
            evictions: cache.evictions(),
            invalid_accesses: cache.invalid_accesses(),
            duration,
        })
    }
}
