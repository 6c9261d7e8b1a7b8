//! Configuration for parallel search execution.

/// Configuration for parallel search execution.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of workers (and partitions) to create.
    pub num_workers: usize,
    /// Workers allowed to enumerate at the same time. Extra threads wait for
    /// a free slot.
    pub max_running: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        let cpus = num_cpus::get();
        Self {
            num_workers: cpus,
            max_running: cpus,
        }
    }
}

impl ParallelConfig {
    /// Create a new parallel config with the specified number of workers.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the worker count from an Option, keeping the detected CPU count on `None`.
    pub fn with_workers_option(self, num_workers: Option<usize>) -> Self {
        match num_workers {
            Some(n) => self.with_workers(n),
            None => self,
        }
    }
}
