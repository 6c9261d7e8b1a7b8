//! Search result types and statistics

use crate::puzzle::{Assignment, Formula};
use crate::search::partition::Partition;
use std::time::Duration;

/// An assignment that satisfies one formula. An assignment satisfying both
/// formulas is recorded as two solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Solution {
    pub formula: Formula,
    pub assignment: Assignment,
}

impl Solution {
    pub fn new(formula: Formula, assignment: Assignment) -> Self {
        Self {
            formula,
            assignment,
        }
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.formula, self.assignment)
    }
}

/// Statistics from one worker's pass over its partition
#[derive(Debug, Clone)]
pub struct WorkerStatistics {
    /// Index of the worker (and of its partition)
    pub worker_id: usize,
    /// First-slot values the worker enumerated
    pub partition: Partition,
    /// Number of full assignments evaluated
    pub checks: u64,
    /// Solutions found, counting each formula separately
    pub matches: u64,
    /// Wall-clock time spent enumerating
    pub elapsed_time: Duration,
}

impl WorkerStatistics {
    pub fn new(partition: Partition) -> Self {
        Self {
            worker_id: partition.index,
            partition,
            checks: 0,
            matches: 0,
            elapsed_time: Duration::ZERO,
        }
    }

    /// Assignments checked per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.checks as f64 / secs
        }
    }

    /// One-line summary printed once the worker has finished.
    pub fn format_summary(&self) -> String {
        format!(
            "Worker {} ({}): {} checks performed and {} solutions found in {:.2?} ({:.0} checks/sec)",
            self.worker_id,
            self.partition,
            self.checks,
            self.matches,
            self.elapsed_time,
            self.throughput()
        )
    }
}

/// Aggregate of every worker's output, in worker order.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Solutions of worker 0, then worker 1, and so on
    pub solutions: Vec<Solution>,
    /// Sum of the per-worker match counts
    pub total_matches: u64,
    /// Sum of the per-worker check counts
    pub total_checks: u64,
    /// Per-worker statistics, ordered by worker id
    pub worker_statistics: Vec<WorkerStatistics>,
    /// Time from spawning the first worker to the last join
    pub elapsed_time: Duration,
}

impl SearchResult {
    /// Number of solutions for one formula.
    pub fn count_for(&self, formula: Formula) -> usize {
        self.solutions_for(formula).count()
    }

    /// Solutions for one formula, in result order.
    pub fn solutions_for(&self, formula: Formula) -> impl Iterator<Item = &Solution> + '_ {
        self.solutions
            .iter()
            .filter(move |solution| solution.formula == formula)
    }

    /// Format the totals as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!(
            "{} total solutions discovered\n",
            self.total_matches
        ));
        for formula in Formula::ALL {
            s.push_str(&format!("  {}: {}\n", formula, self.count_for(formula)));
        }
        s.push_str(&format!("Checks performed: {}\n", self.total_checks));
        s.push_str(&format!("Search time: {:.2?}\n", self.elapsed_time));
        s
    }
}
