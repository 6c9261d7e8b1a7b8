use clap::Parser;
use std::num::IntErrorKind;
use std::path::PathBuf;
use std::time::Instant;

mod error;
mod output;
mod puzzle;
mod search;

use error::SearchError;
use output::{OutputConfig, TagStyle, write_solutions_file};
use search::{FirstSlotRange, ParallelConfig, SearchConfig, run_parallel_search};

// --- Command Line Arguments ---

#[derive(Parser, Debug)]
#[command(name = "snake-solver")]
#[command(about = "snake-solver - exhaustive solver for the nine-digit snake puzzle")]
#[command(version)]
struct Args {
    /// Path to the file that solutions will be written to (counts only if omitted)
    output: Option<PathBuf>,
    /// Smallest value of x1 to search
    #[arg(default_value_t = 1, allow_negative_numbers = true, value_parser = parse_bound)]
    start: i64,
    /// Largest value of x1 to search
    #[arg(default_value_t = 9, allow_negative_numbers = true, value_parser = parse_bound)]
    end: i64,

    /// Number of workers, one per block of x1 values (defaults to the number of CPUs)
    ///
    /// Each worker is its own thread, but no more workers than there are CPUs
    /// enumerate at the same time; the rest wait for a free slot.
    #[arg(long, short = 'j')]
    cores: Option<usize>,
    /// Tag solutions with S/O instead of sequential/standard
    #[arg(long)]
    short_tags: bool,
    /// Do not write the solution count line at the top of the output file
    #[arg(long)]
    no_header: bool,
    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

/// Parse a range bound. Integers too large for `i64` saturate so they are
/// rejected by range validation instead of by the argument parser.
fn parse_bound(s: &str) -> Result<i64, String> {
    match s.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(format!("'{}' is not an integer", s)),
        },
    }
}

fn run(args: &Args) -> Result<(), SearchError> {
    // Validate before any enumeration starts.
    let range = FirstSlotRange::new(args.start, args.end)?;

    let search_config = SearchConfig::default()
        .with_range(range)
        .with_verbose(args.verbose);
    let parallel_config = ParallelConfig::default().with_workers_option(args.cores);

    let result = run_parallel_search(&search_config, &parallel_config)?;

    for stats in &result.worker_statistics {
        println!("{}", stats.format_summary());
    }

    if let Some(path) = &args.output {
        let tag_style = if args.short_tags {
            TagStyle::Short
        } else {
            TagStyle::Long
        };
        let output_config = OutputConfig::default()
            .with_tag_style(tag_style)
            .with_header(!args.no_header);
        write_solutions_file(path, &result, &output_config)?;
        if args.verbose {
            println!("Wrote {} solutions to {}", result.solutions.len(), path.display());
        }
    }

    if args.verbose {
        print!("{}", result.format_summary());
    } else {
        println!("{} total solutions discovered", result.total_matches);
    }
    Ok(())
}

// --- Main Function ---
fn main() {
    let start = Instant::now();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Time taken: {:.3?}", start.elapsed());
}
