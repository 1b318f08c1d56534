// Data models for cache simulation

use serde::Serialize;
use setassoc_cache::{CacheSnapshot, Statistics, TraceEvent};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Stream size parameter used by the generated patterns
pub const DEFAULT_N: usize = 32;

/// Smallest address space the simulator accepts
pub const MIN_TOTAL_BLOCKS: i64 = 1024;

/// Number of sets in the simulated cache
pub const DEFAULT_NUM_SETS: usize = setassoc_cache::config::DEFAULT_NUM_SETS;

/// Generated access patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccessPattern {
    /// `0..2n`, four times
    Sequential,
    /// `4n` uniform draws from the address space
    Random,
    /// `0..n`, `1..n`, `n..2n`, four times
    MidRepeat,
}

impl AccessPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessPattern::Sequential => "Sequential",
            AccessPattern::Random => "Random",
            AccessPattern::MidRepeat => "Mid-Repeat",
        }
    }

    /// Get all available patterns
    pub fn all() -> Vec<AccessPattern> {
        vec![
            AccessPattern::Sequential,
            AccessPattern::Random,
            AccessPattern::MidRepeat,
        ]
    }
}

impl fmt::Display for AccessPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessPattern {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "sequential" | "seq" => Ok(AccessPattern::Sequential),
            "random" | "rand" => Ok(AccessPattern::Random),
            "mid-repeat" | "midrepeat" | "mid" => Ok(AccessPattern::MidRepeat),
            _ => Err(format!(
                "unknown pattern '{name}' (expected sequential, random or mid-repeat)"
            )),
        }
    }
}

/// Where a run's addresses come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamSource {
    /// Generate the stream from a pattern
    Pattern(AccessPattern),
    /// Replay addresses recorded in a file
    File(PathBuf),
}

impl fmt::Display for StreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamSource::Pattern(pattern) => write!(f, "{pattern}"),
            StreamSource::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Size of the simulated address space in blocks
    pub total_blocks: i64,
    /// Pattern size parameter
    pub n: usize,
    /// Number of cache sets
    pub num_sets: usize,
    /// Address stream to replay
    pub source: StreamSource,
    /// Seed for the random pattern (None = fresh entropy)
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_blocks: MIN_TOTAL_BLOCKS,
            n: DEFAULT_N,
            num_sets: DEFAULT_NUM_SETS,
            source: StreamSource::Pattern(AccessPattern::Sequential),
            seed: None,
        }
    }
}

/// Results of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Description of the replayed stream
    pub source: String,
    /// Size of the simulated address space
    pub total_blocks: i64,
    /// Number of addresses replayed (valid or not)
    pub stream_len: usize,
    /// Trace events in order
    pub trace: Vec<TraceEvent>,
    /// Resident lines at the end of the run
    pub snapshot: CacheSnapshot,
    /// Aggregate statistics
    pub statistics: Statistics,
    /// Replacements in full sets
    pub evictions: u64,
    /// Out-of-range addresses
    pub invalid_accesses: u64,
    /// Wall time spent replaying
    pub duration: Duration,
}

impl SimulationResult {
    /// Trace rendered as log lines
    pub fn trace_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.trace.iter().map(ToString::to_string)
    }
}

/// CSV export row for run statistics
#[derive(Debug, Serialize)]
pub struct CsvStatsRow {
    pub source: String,
    pub total_blocks: i64,
    pub stream_len: usize,
    pub total_accesses: u64,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub miss_rate: f64,
    pub evictions: u64,
    pub invalid_accesses: u64,
    pub total_memory_access_time: u64,
    pub average_memory_access_time: f64,
    pub duration_us: u64,
}

/// CSV export row for one trace event
#[derive(Debug, Serialize)]
pub struct CsvTraceRow {
    pub seq: usize,
    pub kind: &'static str,
    pub address: i64,
    pub set: Option<usize>,
    pub event: String,
}
