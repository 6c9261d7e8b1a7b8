//! Completion channel between search workers and the coordinator.

use crate::search::result::{Solution, WorkerStatistics};
use crossbeam_channel::{Receiver, Sender, bounded, unbounded};

/// Message sent from a worker to the coordinator.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// Worker has enumerated its whole partition.
    Finished {
        worker_id: usize,
        solutions: Vec<Solution>,
        statistics: WorkerStatistics,
    },
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// Send messages to coordinator.
    pub to_coordinator: Sender<WorkerMessage>,
    /// Run slots shared by every worker.
    pub slots: SlotPool,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive messages from workers.
    pub from_workers: Receiver<WorkerMessage>,
}

/// Counting semaphore limiting how many workers enumerate at once.
///
/// A slot is a token in a bounded channel: acquiring sends one (blocking while
/// the channel is full) and the guard takes one back out when dropped.
#[derive(Debug, Clone)]
pub struct SlotPool {
    acquire: Sender<()>,
    release: Receiver<()>,
}

impl SlotPool {
    pub fn new(slots: usize) -> Self {
        let (acquire, release) = bounded(slots.max(1));
        Self { acquire, release }
    }

    /// Block until a slot is free and hold it until the guard is dropped.
    pub fn acquire(&self) -> SlotGuard<'_> {
        // The pool owns both ends, so the channel never disconnects.
        let _ = self.acquire.send(());
        SlotGuard { pool: self }
    }
}

/// A held run slot.
pub struct SlotGuard<'a> {
    pool: &'a SlotPool,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        let _ = self.pool.release.try_recv();
    }
}

/// Create channels for parallel search with the given number of workers, at
/// most `max_running` of which enumerate at the same time.
///
/// The coordinator's receiver disconnects once every worker has dropped its
/// sender, which is how a worker that died without reporting is noticed.
pub fn create_channels(
    num_workers: usize,
    max_running: usize,
) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    // Unbounded channel from workers to coordinator (workers shouldn't block)
    let (worker_tx, coordinator_rx) = unbounded();
    let slots = SlotPool::new(max_running);

    let worker_channels = (0..num_workers)
        .map(|_| WorkerChannels {
            to_coordinator: worker_tx.clone(),
            slots: slots.clone(),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
    };

    (coordinator, worker_channels)
}
