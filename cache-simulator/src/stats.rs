// Statistics reporting and export for cache simulation

use crate::models::{CsvStatsRow, CsvTraceRow, SimulationResult};
use std::path::Path;

/// Renders and exports the results of one simulation run
pub struct SimulationReport<'a> {
    result: &'a SimulationResult,
}

impl<'a> SimulationReport<'a> {
    /// Create a report over a finished run
    pub fn new(result: &'a SimulationResult) -> Self {
        Self { result }
    }

    /// Trace log, one event per line
    pub fn render_log(&self) -> String {
        let mut out = String::new();
        for line in self.result.trace_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Resident lines per set
    pub fn render_snapshot(&self) -> String {
        self.result.snapshot.to_string()
    }

    /// Statistics block, one `Name: value` per line
    pub fn render_statistics(&self) -> String {
        self.result.statistics.to_string()
    }

    /// Print the full report: log (unless `quiet`), snapshot and statistics
    pub fn print_summary(&self, quiet: bool) {
        println!("\nCache Simulation ({})", self.result.source);
        println!("================");
        println!("Total memory blocks: {}", self.result.total_blocks);
        println!("Addresses replayed: {}", self.result.stream_len);

        if !quiet {
            println!("\nSimulation Log:");
            print!("{}", self.render_log());
        }

        println!("\nCache Snapshot:");
        print!("{}", self.render_snapshot());

        println!("\nStatistics:");
        println!("{}", self.render_statistics());
        if self.result.invalid_accesses > 0 {
            println!(
                "Invalid Accesses (excluded): {}",
                self.result.invalid_accesses
            );
        }
        println!("Evictions: {}", self.result.evictions);
        println!("\nSimulation completed in {:.2?}", self.result.duration);
    }

    /// Build the statistics CSV row
    pub fn stats_row(&self) -> CsvStatsRow {
        let stats = &self.result.statistics;
        CsvStatsRow {
            source: self.result.source.clone(),
            total_blocks: self.result.total_blocks,
            stream_len: self.result.stream_len,
            total_accesses: stats.total_accesses,
            hits: stats.hits,
            misses: stats.misses,
            hit_rate: stats.hit_rate,
            miss_rate: stats.miss_rate,
            evictions: self.result.evictions,
            invalid_accesses: self.result.invalid_accesses,
            total_memory_access_time: stats.total_memory_access_time,
            average_memory_access_time: stats.average_memory_access_time,
            duration_us: u64::try_from(self.result.duration.as_micros()).unwrap_or(u64::MAX),
        }
    }

    /// Export the statistics to a CSV file
    pub fn export_csv(&self, path: &Path) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.serialize(self.stats_row())?;
        writer.flush()?;
        Ok(())
    }

    /// Export the trace to a CSV file, one row per event
    pub fn export_trace_csv(&self, path: &Path) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_path(path)?;
        for (seq, event) in self.result.trace.iter().enumerate() {
            writer.serialize(CsvTraceRow {
                seq,
                kind: event.kind(),
                address: event.address(),
                set: event.set(),
                event: event.to_string(),
            })?;
        }
        writer.flush()?;
        Ok(())
    }
}
