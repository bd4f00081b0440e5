//! Renders a run's [`Stats`] as a text summary or a CSV row (§4.11).

use std::fs::OpenOptions;
use std::path::Path;

use cachesim_core::Stats;
use serde::Serialize;

use crate::error::TraceError;

/// One policy run's statistics, flattened for CSV export.
#[derive(Debug, Serialize)]
pub struct CsvResultRow {
    /// Name of the policy that produced this row (`lru`, `arc`, ...).
    pub policy: String,
    /// Path of the trace file that was run.
    pub trace: String,
    /// Cache capacity used for this run.
    pub capacity: usize,
    pub read_req: u64,
    pub read_hit: u64,
    pub read_miss: u64,
    pub write_req: u64,
    pub write_hit: u64,
    pub write_miss: u64,
    pub total_req: u64,
    pub total_hit: u64,
    pub total_miss: u64,
    pub cold_misses: u64,
    pub hit_rate: f64,
    pub read_hit_rate: f64,
    pub write_hit_rate: f64,
}

impl CsvResultRow {
    fn from_stats(policy: &str, trace: &str, capacity: usize, stats: &Stats) -> Self {
        Self {
            policy: policy.to_string(),
            trace: trace.to_string(),
            capacity,
            read_req: stats.read_req,
            read_hit: stats.read_hit,
            read_miss: stats.read_miss,
            write_req: stats.write_req,
            write_hit: stats.write_hit,
            write_miss: stats.write_miss,
            total_req: stats.total_req,
            total_hit: stats.total_hit,
            total_miss: stats.total_miss,
            cold_misses: stats.cold_misses,
            hit_rate: stats.hit_rate(),
            read_hit_rate: stats.read_hit_rate(),
            write_hit_rate: stats.write_hit_rate(),
        }
    }
}

/// Print a box-column summary table of `stats` to stdout.
pub fn print_summary(policy: &str, trace: &str, capacity: usize, stats: &Stats) {
    println!("\nCache Simulation Summary");
    println!("========================");
    println!("Policy:   {policy}");
    println!("Trace:    {trace}");
    println!("Capacity: {capacity}");
    println!();
    println!("{:<16} {:>12}", "Metric", "Value");
    println!("{}", "-".repeat(30));
    println!("{:<16} {:>12}", "read_req", stats.read_req);
    println!("{:<16} {:>12}", "read_hit", stats.read_hit);
    println!("{:<16} {:>12}", "read_miss", stats.read_miss);
    println!("{:<16} {:>12}", "write_req", stats.write_req);
    println!("{:<16} {:>12}", "write_hit", stats.write_hit);
    println!("{:<16} {:>12}", "write_miss", stats.write_miss);
    println!("{:<16} {:>12}", "total_req", stats.total_req);
    println!("{:<16} {:>12}", "total_hit", stats.total_hit);
    println!("{:<16} {:>12}", "total_miss", stats.total_miss);
    println!("{:<16} {:>12}", "cold_misses", stats.cold_misses);
    println!();
    println!("{:<16} {:>11.2}%", "hit_rate", stats.hit_rate());
    println!("{:<16} {:>11.2}%", "read_hit_rate", stats.read_hit_rate());
    println!("{:<16} {:>11.2}%", "write_hit_rate", stats.write_hit_rate());
}

/// Append one row for this run to `path`, writing a header only if the file
/// is new. Lets a caller compare several policies by running the binary once
/// per policy against the same `--output-csv`.
pub fn append_csv(
    path: &Path,
    policy: &str,
    trace: &str,
    capacity: usize,
    stats: &Stats,
) -> Result<(), TraceError> {
    let write_header = !path.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);
    writer.serialize(CsvResultRow::from_stats(policy, trace, capacity, stats))?;
    writer.flush()?;
    Ok(())
}

impl From<csv::Error> for TraceError {
    fn from(err: csv::Error) -> Self {
        TraceError::Io(err.into())
    }
}
