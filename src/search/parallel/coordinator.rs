//! Parallel search coordinator that manages worker threads.

use crate::error::SearchError;
use crate::search::config::SearchConfig;
use crate::search::parallel::channel::{WorkerChannels, WorkerMessage, create_channels};
use crate::search::parallel::collector::Collector;
use crate::search::parallel::config::ParallelConfig;
use crate::search::partition::{Partition, partition};
use crate::search::result::SearchResult;
use crate::search::search_partition;
use std::any::Any;
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Run the partitioned search with the given configuration.
///
/// One thread is spawned per non-empty partition, and at most
/// `parallel_config.max_running` of them enumerate at once. The call returns
/// once every worker has reported and been joined; any worker failure fails
/// the whole search.
pub fn run_parallel_search(
    search_config: &SearchConfig,
    parallel_config: &ParallelConfig,
) -> Result<SearchResult, SearchError> {
    let start_time = Instant::now();

    // Workers beyond the number of x1 values get nothing to do and are not spawned.
    let partitions: Vec<Partition> = partition(search_config.range, parallel_config.num_workers)
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();

    if search_config.verbose {
        println!(
            "Searching {} with {} workers ({} checks)",
            search_config.range,
            partitions.len(),
            search_config.total_checks()
        );
        for p in &partitions {
            println!("  worker {}: {} ({} checks)", p.index, p, p.expected_checks());
        }
    }

    let (coordinator_channels, worker_channels) =
        create_channels(partitions.len(), parallel_config.max_running);
    let mut collector = Collector::new(partitions.iter().map(|p| p.index).collect());

    let mut worker_handles = Vec::with_capacity(partitions.len());
    for (partition, channels) in partitions.into_iter().zip(worker_channels) {
        let worker_id = partition.index;
        let spawned = thread::Builder::new()
            .name(format!("search-worker-{}", worker_id))
            .spawn(move || run_worker(partition, channels));
        match spawned {
            Ok(handle) => worker_handles.push((worker_id, handle)),
            Err(e) => {
                // Workers already running still own their partitions; wait
                // for them before giving up.
                drop(coordinator_channels);
                let _ = join_workers(worker_handles);
                return Err(SearchError::WorkerFailed {
                    worker_id,
                    message: format!("failed to spawn thread: {}", e),
                });
            }
        }
    }

    // A disconnect before every report arrived means some worker died; the
    // joins below and the collector turn that into an error.
    while !collector.is_complete() {
        match coordinator_channels.from_workers.recv() {
            Ok(message) => collector.record(message),
            Err(_) => break,
        }
    }

    join_workers(worker_handles)?;
    collector.finish(start_time.elapsed())
}

/// Join every worker thread, returning the first panic as `WorkerFailed`
/// only after all of them have exited.
fn join_workers(handles: Vec<(usize, JoinHandle<()>)>) -> Result<(), SearchError> {
    let mut first_failure = None;
    for (worker_id, handle) in handles {
        if let Err(payload) = handle.join() {
            first_failure.get_or_insert(SearchError::WorkerFailed {
                worker_id,
                message: panic_message(payload.as_ref()),
            });
        }
    }
    match first_failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Worker function: enumerate one partition and report once.
fn run_worker(partition: Partition, channels: WorkerChannels) {
    let worker_id = partition.index;
    let (solutions, statistics) = {
        let _slot = channels.slots.acquire();
        search_partition(partition)
    };

    // The coordinator only hangs up after an earlier failure, so there is
    // nobody left to tell.
    let _ = channels.to_coordinator.send(WorkerMessage::Finished {
        worker_id,
        solutions,
        statistics,
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {}", s)
    } else {
        "panicked".to_string()
    }
}
