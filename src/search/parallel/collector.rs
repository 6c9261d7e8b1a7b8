//! Merging worker reports into one deterministic result.

use crate::error::SearchError;
use crate::search::parallel::channel::WorkerMessage;
use crate::search::result::{SearchResult, Solution, WorkerStatistics};
use std::time::Duration;

struct WorkerReport {
    worker_id: usize,
    solutions: Vec<Solution>,
    statistics: WorkerStatistics,
}

/// Gathers one report per spawned worker.
///
/// Reports may arrive in any order; [`Collector::finish`] orders them by
/// worker id so the merged solution list does not depend on scheduling.
pub struct Collector {
    expected: Vec<usize>,
    reports: Vec<WorkerReport>,
}

impl Collector {
    /// Expect one report from each worker in `worker_ids`.
    pub fn new(worker_ids: Vec<usize>) -> Self {
        Self {
            reports: Vec::with_capacity(worker_ids.len()),
            expected: worker_ids,
        }
    }

    pub fn record(&mut self, message: WorkerMessage) {
        match message {
            WorkerMessage::Finished {
                worker_id,
                solutions,
                statistics,
            } => self.reports.push(WorkerReport {
                worker_id,
                solutions,
                statistics,
            }),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.reports.len() >= self.expected.len()
    }

    /// First expected worker that has not reported, if any.
    fn missing_worker(&self) -> Option<usize> {
        self.expected
            .iter()
            .copied()
            .find(|id| !self.reports.iter().any(|r| r.worker_id == *id))
    }

    /// Concatenate the reports in worker order and sum their counts.
    ///
    /// Fails if any expected worker never reported: a partial result set is
    /// never returned.
    pub fn finish(mut self, elapsed_time: Duration) -> Result<SearchResult, SearchError> {
        if let Some(worker_id) = self.missing_worker() {
            return Err(SearchError::WorkerFailed {
                worker_id,
                message: "worker exited without reporting results".to_string(),
            });
        }

        self.reports.sort_by_key(|report| report.worker_id);

        let mut result = SearchResult {
            elapsed_time,
            ..Default::default()
        };
        for report in self.reports {
            result.total_matches += report.statistics.matches;
            result.total_checks += report.statistics.checks;
            result.solutions.extend(report.solutions);
            result.worker_statistics.push(report.statistics);
        }
        Ok(result)
    }
}
