//! Exhaustive search over all digit assignments
//!
//! This module splits the 9! assignments by the value of x1 and checks each
//! assignment against both formulas:
//! - Partition: contiguous blocks of x1 values, one per worker
//! - Permutation: in-place enumeration of the other eight slots
//! - Parallel: one thread per partition, results merged in worker order

pub mod config;
pub mod parallel;
pub mod partition;
pub mod permutation;
pub mod result;

pub use config::{FirstSlotRange, SearchConfig};
pub use parallel::{ParallelConfig, run_parallel_search};
pub use result::{SearchResult, Solution};

use crate::puzzle::formula::matching_formulas;
use partition::Partition;
use result::WorkerStatistics;
use std::time::Instant;

/// Enumerate every assignment of `partition`, returning the solutions in
/// enumeration order together with the worker's statistics.
///
/// For each assignment the sequential formula is checked before the standard
/// one, so an assignment satisfying both contributes two consecutive entries.
pub fn search_partition(partition: Partition) -> (Vec<Solution>, WorkerStatistics) {
    let start_time = Instant::now();
    let mut solutions = Vec::new();
    let mut statistics = WorkerStatistics::new(partition);

    for assignment in statistics.partition.permutations() {
        statistics.checks += 1;
        for formula in matching_formulas(&assignment) {
            statistics.matches += 1;
            solutions.push(Solution::new(formula, assignment));
        }
    }

    statistics.elapsed_time = start_time.elapsed();
    (solutions, statistics)
}
