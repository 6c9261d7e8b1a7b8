//! Error type shared by the search, the collector and the output stage.

use std::path::PathBuf;

use crate::puzzle::SLOTS;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Invalid range {start}..={end}: expected 1 <= start <= end <= 9")]
    InvalidRange { start: i64, end: i64 },

    #[error("Invalid assignment {values:?}: {reason}")]
    InvalidAssignment {
        values: [u8; SLOTS],
        reason: &'static str,
    },

    #[error("Worker {worker_id} failed: {message}")]
    WorkerFailed { worker_id: usize, message: String },

    #[error("Failed to write solutions to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
