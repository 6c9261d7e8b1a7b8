//! Parallel execution of the partitioned search.
//!
//! # Architecture
//!
//! - A **partitioner** splits the x1 values into one contiguous block per worker
//! - Each **worker** thread owns its block and a local solution list
//! - Workers send a single completion message over a **channel**
//! - The **collector** orders the reports by worker id and concatenates them
//!
//! Workers never share mutable state; the only aggregation happens after
//! every worker has reported.
//!
//! # Example
//!
//! ```ignore
//! use crate::search::{ParallelConfig, SearchConfig, run_parallel_search};
//!
//! let config = ParallelConfig::default().with_workers(4);
//! let result = run_parallel_search(&SearchConfig::default(), &config)?;
//! assert_eq!(result.total_checks, 362_880);
//! ```

pub mod channel;
pub mod collector;
pub mod config;
pub mod coordinator;

pub use config::ParallelConfig;
pub use coordinator::run_parallel_search;
