//! Splitting the first-slot values between workers.

use crate::search::config::FirstSlotRange;
use crate::search::permutation::{PERMUTATIONS_PER_FIRST_VALUE, Permutations};
use std::ops::RangeInclusive;

/// A contiguous block of x1 values owned by one worker. May be empty when
/// there are more workers than values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Index of the worker that owns this block.
    pub index: usize,
    first_values: RangeInclusive<u8>,
}

impl Partition {
    pub fn first_values(&self) -> RangeInclusive<u8> {
        self.first_values.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.first_values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.first_values.clone().count()
    }

    /// Assignments a worker will check for this partition.
    pub fn expected_checks(&self) -> u64 {
        self.len() as u64 * PERMUTATIONS_PER_FIRST_VALUE
    }

    pub fn permutations(&self) -> Permutations {
        Permutations::new(self.first_values())
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "empty")
        } else {
            write!(
                f,
                "x1 in {}..={}",
                self.first_values.start(),
                self.first_values.end()
            )
        }
    }
}

/// Split `range` into `num_workers` contiguous blocks.
///
/// The first `len % num_workers` blocks get one extra value, so block sizes
/// differ by at most one. When `num_workers` exceeds the number of values the
/// trailing blocks are empty. A worker count of zero is treated as one.
pub fn partition(range: FirstSlotRange, num_workers: usize) -> Vec<Partition> {
    let num_workers = num_workers.max(1);
    let len = range.value_count();
    let base = len / num_workers;
    let extra = len % num_workers;

    let mut next = range.start();
    (0..num_workers)
        .map(|index| {
            let size = base + usize::from(index < extra);
            // `size` never exceeds 9, and `next` never exceeds 10.
            let start = next;
            next += size as u8;
            Partition {
                index,
                first_values: start..=next - 1,
            }
        })
        .collect()
}
