use std::path::PathBuf;

use cache_simulator::input::RequestIterator;
use cache_simulator::report;
use cachesim_core::policy::precompute_next_use;
use cachesim_core::{
    ArcPolicy, BeladyPolicy, Driver, LarcPolicy, LruPolicy, NHitLowestPolicy, NHitLruPolicy,
    Policy, Request,
};
use clap::{Parser, ValueEnum};

/// Run one cache-replacement policy over a trace and report hit/miss statistics.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the CSV trace file.
    #[arg(short, long, value_name = "PATH")]
    trace: PathBuf,

    /// Policy to simulate.
    #[arg(short, long, value_enum)]
    policy: PolicyArg,

    /// Cache capacity (number of entries).
    #[arg(short, long, default_value = "10000")]
    capacity: usize,

    /// N-Hit occupancy trigger threshold, as a percentage.
    #[arg(long, default_value = "80.0")]
    trigger_threshold: f64,

    /// N-Hit reference count required to promote (both flavors).
    #[arg(long = "n", visible_alias = "insertion-threshold", default_value = "2")]
    n: u64,

    /// N-Hit (LRU-eviction) tracking-table size, as a multiple of capacity.
    #[arg(long, default_value = "2.0")]
    tracking_ratio: f64,

    /// Bytes per page; offsets are divided by this before use as a cache key.
    /// Pass 1 to use raw offsets.
    #[arg(long, default_value = "4096")]
    page_size: u64,

    /// Only include requests with timestamp >= this value.
    #[arg(long)]
    start_time: Option<f64>,

    /// Only include requests with timestamp <= this value.
    #[arg(long)]
    end_time: Option<f64>,

    /// Append this run's statistics as one row to a CSV file.
    #[arg(long, value_name = "PATH")]
    output_csv: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Lru,
    Belady,
    Arc,
    Larc,
    NhitLru,
    NhitLowest,
}

impl PolicyArg {
    fn name(self) -> &'static str {
        match self {
            PolicyArg::Lru => "lru",
            PolicyArg::Belady => "belady",
            PolicyArg::Arc => "arc",
            PolicyArg::Larc => "larc",
            PolicyArg::NhitLru => "nhit-lru",
            PolicyArg::NhitLowest => "nhit-lowest",
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("Cache Simulation");
    println!("================");
    println!("Trace:    {}", args.trace.display());
    println!("Policy:   {}", args.policy.name());
    println!("Capacity: {}", args.capacity);
    println!();

    let reader = RequestIterator::open(&args.trace, args.page_size)?;
    let mut requests = Vec::new();
    for request in reader {
        let request = request?;
        if let Some(start) = args.start_time {
            if request.ts < start {
                continue;
            }
        }
        if let Some(end) = args.end_time {
            if request.ts > end {
                continue;
            }
        }
        requests.push(request);
    }

    if requests.is_empty() {
        return Err(cache_simulator::TraceError::EmptySequence.into());
    }

    let policy = build_policy(args.policy, &args, &requests)?;
    let stats = Driver::new(policy).run(requests.iter());

    let trace_display = args.trace.to_string_lossy();
    report::print_summary(args.policy.name(), &trace_display, args.capacity, &stats);

    if let Some(csv_path) = &args.output_csv {
        report::append_csv(csv_path, args.policy.name(), &trace_display, args.capacity, &stats)?;
        println!("\nResults appended to: {}", csv_path.display());
    }

    Ok(())
}

fn build_policy(
    kind: PolicyArg,
    args: &Args,
    requests: &[Request],
) -> Result<Policy, cachesim_core::PolicyError> {
    Ok(match kind {
        PolicyArg::Lru => Policy::Lru(LruPolicy::new(args.capacity)?),
        PolicyArg::Belady => {
            let keys: Vec<u64> = requests.iter().map(|r| r.key).collect();
            let next_use = precompute_next_use(&keys);
            Policy::Belady(BeladyPolicy::new(args.capacity, next_use)?)
        }
        PolicyArg::Arc => Policy::Arc(ArcPolicy::new(args.capacity)?),
        PolicyArg::Larc => Policy::Larc(LarcPolicy::new(args.capacity)?),
        PolicyArg::NhitLru => Policy::NHitLru(NHitLruPolicy::new(
            args.capacity,
            args.trigger_threshold,
            args.n,
            args.tracking_ratio,
        )?),
        PolicyArg::NhitLowest => Policy::NHitLowest(NHitLowestPolicy::new(
            args.capacity,
            args.trigger_threshold,
            args.n,
        )?),
    })
}
