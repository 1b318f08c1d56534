use cache_simulator::generator::{AddressTraceConfig, AddressTraceGenerator};
use cache_simulator::logger;
use cache_simulator::models::{AccessPattern, DEFAULT_N, MIN_TOTAL_BLOCKS};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Address trace generator for cache simulations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address pattern (sequential, random, mid-repeat)
    #[arg(short, long, default_value = "sequential")]
    pattern: AccessPattern,

    /// Pattern size parameter
    #[arg(short, long, default_value_t = DEFAULT_N)]
    n: usize,

    /// Address-space size, bounds the random pattern
    #[arg(long, default_value_t = MIN_TOTAL_BLOCKS)]
    total_blocks: i64,

    /// Seed for the random pattern
    #[arg(long)]
    seed: Option<u64>,

    /// Output file
    #[arg(short, long, default_value = "address_trace.txt")]
    output: PathBuf,

    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init(args.verbose)?;

    let config = AddressTraceConfig {
        pattern: args.pattern,
        n: args.n,
        total_blocks: args.total_blocks,
        seed: args.seed,
        output: args.output,
    };

    println!("Address Trace Generator");
    println!("=======================");

    let generator = AddressTraceGenerator::new(config);
    let written = generator.generate()?;
    println!("Wrote {written} addresses");

    Ok(())
}
