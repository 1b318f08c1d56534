use cache_simulator::generator::{AddressTraceConfig, AddressTraceGenerator};
use cache_simulator::logger;
use cache_simulator::models::{
    AccessPattern, SimulationConfig, StreamSource, DEFAULT_N, DEFAULT_NUM_SETS, MIN_TOTAL_BLOCKS,
};
use cache_simulator::runner::SimulationRunner;
use cache_simulator::stats::SimulationReport;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// MRU set-associative cache simulator CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    simulate: SimulateArgs,
}

/// Flags for a simulation run
#[derive(clap::Args, Debug)]
struct SimulateArgs {
    /// Size of the memory address space in blocks (at least 1024)
    #[arg(long, default_value_t = MIN_TOTAL_BLOCKS)]
    total_blocks: i64,

    /// Address pattern (sequential, random, mid-repeat)
    #[arg(short, long, default_value = "sequential")]
    pattern: AccessPattern,

    /// Pattern size parameter
    #[arg(short, long, default_value_t = DEFAULT_N)]
    n: usize,

    /// Seed for the random pattern
    #[arg(long)]
    seed: Option<u64>,

    /// Replay addresses from a trace file instead of a generated pattern
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Number of cache sets
    #[arg(long, default_value_t = DEFAULT_NUM_SETS)]
    sets: usize,

    /// Export statistics to a CSV file
    #[arg(long, value_name = "PATH")]
    output_csv: Option<PathBuf>,

    /// Export the trace to a CSV file
    #[arg(long, value_name = "PATH")]
    trace_csv: Option<PathBuf>,

    /// Omit the per-access log from the report
    #[arg(short, long)]
    quiet: bool,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a cache simulation
    Simulate(SimulateArgs),

    /// Write a generated address trace to a file
    Generate {
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

        /// Log to stderr (-v info, -vv debug, -vvv trace)
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match args.command {
        Some(Commands::Generate {
            pattern,
            n,
            total_blocks,
            seed,
            output,
            verbose,
        }) => {
            logger::init(verbose)?;

            let config = AddressTraceConfig {
                pattern,
                n,
                total_blocks,
                seed,
                output,
            };

            let generator = AddressTraceGenerator::new(config);
            let written = generator.generate()?;
            println!("Wrote {written} addresses");

            Ok(())
        }

        Some(Commands::Simulate(simulate)) => run_simulator(simulate),

        // Legacy mode (no subcommand)
        None => run_simulator(args.simulate),
    }
}

/// Run one simulation and print its report
fn run_simulator(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    logger::init(args.verbose)?;

    let source = match args.input {
        Some(path) => StreamSource::File(path),
        None => StreamSource::Pattern(args.pattern),
    };

    let config = SimulationConfig {
        total_blocks: args.total_blocks,
        n: args.n,
        num_sets: args.sets,
        source,
        seed: args.seed,
    };

    let runner = SimulationRunner::new(config);
    let result = match runner.run() {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error running simulation: {e}");
            return Err(e.into());
        }
    };

    let report = SimulationReport::new(&result);
    report.print_summary(args.quiet);

    if let Some(csv_path) = args.output_csv {
        match report.export_csv(&csv_path) {
            Ok(()) => println!("\nStatistics exported to: {}", csv_path.display()),
            Err(e) => eprintln!("Failed to export CSV: {e}"),
        }
    }

    if let Some(csv_path) = args.trace_csv {
        match report.export_trace_csv(&csv_path) {
            Ok(()) => println!("Trace exported to: {}", csv_path.display()),
            Err(e) => eprintln!("Failed to export trace CSV: {e}"),
        }
    }

    Ok(())
}
