//! Address stream generators
//!
//! Produces the block-address sequences replayed by the simulator. The
//! pattern functions are pure apart from the random one, which draws from a
//! caller-supplied RNG so runs can be reproduced from a seed.

use crate::models::{AccessPattern, DEFAULT_N, MIN_TOTAL_BLOCKS};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Number of times every pattern repeats its base run
pub const REPEATS: usize = 4;

/// Addresses `0..2n`, the whole run repeated four times
pub fn sequential(n: usize) -> Vec<i64> {
    let n = n as i64;
    (0..REPEATS).flat_map(|_| 0..2 * n).collect()
}

/// `4n` addresses drawn uniformly from `0..total_blocks`
///
/// Returns an empty stream if `total_blocks` is not positive.
pub fn random<R: Rng + ?Sized>(n: usize, total_blocks: i64, rng: &mut R) -> Vec<i64> {
    if total_blocks <= 0 {
        return Vec::new();
    }
    (0..REPEATS * n)
        .map(|_| rng.gen_range(0..total_blocks))
        .collect()
}

/// `0..n`, then `1..n`, then `n..2n`, the whole run repeated four times
pub fn mid_repeat(n: usize) -> Vec<i64> {
    let n = n as i64;
    (0..REPEATS)
        .flat_map(|_| (0..n).chain(1..n).chain(n..2 * n))
        .collect()
}

/// RNG for the random pattern: seeded when a seed is given, else from entropy
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl AccessPattern {
    /// Builds this pattern's address stream
    pub fn generate<R: Rng + ?Sized>(&self, n: usize, total_blocks: i64, rng: &mut R) -> Vec<i64> {
        match self {
            AccessPattern::Sequential => sequential(n),
            AccessPattern::Random => random(n, total_blocks, rng),
            AccessPattern::MidRepeat => mid_repeat(n),
        }
    }
}

/// Parameters for writing an address trace file
#[derive(Debug, Clone)]
pub struct AddressTraceConfig {
    /// Pattern to generate
    pub pattern: AccessPattern,
    /// Pattern size parameter
    pub n: usize,
    /// Address-space size (bounds the random pattern)
    pub total_blocks: i64,
    /// Seed for the random pattern
    pub seed: Option<u64>,
    /// Output file
    pub output: PathBuf,
}

impl Default for AddressTraceConfig {
    fn default() -> Self {
        Self {
            pattern: AccessPattern::Sequential,
            n: DEFAULT_N,
            total_blocks: MIN_TOTAL_BLOCKS,
            seed: None,
            output: PathBuf::from("address_trace.txt"),
        }
    }
}

/// Writes generated address streams to disk for later replay
#[derive(Debug)]
pub struct AddressTraceGenerator {
    config: AddressTraceConfig,
}

impl AddressTraceGenerator {
    /// Create a new generator with the given configuration
    pub fn new(config: AddressTraceConfig) -> Self {
        Self { config }
    }

    /// Generate the stream and write it, one address per line.
    ///
    /// Returns the number of addresses written.
    pub fn generate(&self) -> Result<usize, Box<dyn std::error::Error>> {
        if let Some(parent) = self.config.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut rng = make_rng(self.config.seed);
        let addresses =
            self.config
                .pattern
                .generate(self.config.n, self.config.total_blocks, &mut rng);
        debug!(
            "generated {} addresses for pattern {}",
            addresses.len(),
            self.config.pattern
        );

        let file = File::create(&self.config.output)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "# pattern: {}", self.config.pattern)?;
        writeln!(writer, "address")?;
        for address in &addresses {
            writeln!(writer, "{address}")?;
        }
        writer.flush()?;

        info!(
            "wrote {} addresses to {}",
            addresses.len(),
            self.config.output.display()
        );
        Ok(addresses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::AddressReader;
    use std::path::Path;

    /// Helper function to create a temp directory for tests
    fn create_temp_dir(test_name: &str) -> PathBuf {
        let temp_dir = std::env::temp_dir().join(format!("address_generator_test_{}", test_name));
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).expect("Failed to create temp directory");
        temp_dir
    }

    /// Helper function to clean up temp directory
    fn cleanup_temp_dir(path: &Path) {
        let _ = fs::remove_dir_all(path);
    }

    #[test]
    fn test_sequential_shape() {
        let seq = sequential(32);
        assert_eq!(seq.len(), 256);
        let first: Vec<i64> = (0..64).collect();
        for chunk in seq.chunks(64) {
            assert_eq!(chunk, first.as_slice());
        }
    }

    #[test]
    fn test_sequential_small() {
        assert_eq!(sequential(2), vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);
        assert!(sequential(0).is_empty());
    }

    #[test]
    fn test_mid_repeat_shape() {
        let base: Vec<i64> = vec![0, 1, 2, 1, 2, 3, 4, 5];
        let seq = mid_repeat(3);
        assert_eq!(seq.len(), 4 * base.len());
        for chunk in seq.chunks(base.len()) {
            assert_eq!(chunk, base.as_slice());
        }
    }

    #[test]
    fn test_mid_repeat_default_length() {
        // n + (n - 1) + n per repeat
        assert_eq!(mid_repeat(32).len(), 4 * (32 + 31 + 32));
    }

    #[test]
    fn test_random_bounds_and_length() {
        let mut rng = make_rng(Some(1));
        let seq = random(32, 1024, &mut rng);
        assert_eq!(seq.len(), 128);
        assert!(seq.iter().all(|&a| (0..1024).contains(&a)));
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let a = random(32, 4096, &mut make_rng(Some(99)));
        let b = random(32, 4096, &mut make_rng(Some(99)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_empty_address_space() {
        let mut rng = make_rng(Some(3));
        assert!(random(32, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_pattern_dispatch() {
        let mut rng = make_rng(Some(5));
        assert_eq!(
            AccessPattern::Sequential.generate(4, 1024, &mut rng),
            sequential(4)
        );
        assert_eq!(
            AccessPattern::MidRepeat.generate(4, 1024, &mut rng),
            mid_repeat(4)
        );
        assert_eq!(AccessPattern::Random.generate(4, 1024, &mut rng).len(), 16);
    }

    #[test]
    fn test_generator_writes_readable_trace() {
        let temp_dir = create_temp_dir("readable_trace");
        let output = temp_dir.join("nested/trace.txt");

        let config = AddressTraceConfig {
            pattern: AccessPattern::MidRepeat,
            n: 8,
            output: output.clone(),
            ..Default::default()
        };
        let written = AddressTraceGenerator::new(config)
            .generate()
            .expect("Generation failed");

        assert_eq!(written, mid_repeat(8).len());
        let read = AddressReader::new(&output)
            .read_addresses()
            .expect("Failed to read trace");
        assert_eq!(read, mid_repeat(8));

        cleanup_temp_dir(&temp_dir);
    }
}
