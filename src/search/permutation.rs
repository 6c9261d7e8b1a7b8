//! Permutation enumeration over the nine slots.
//!
//! The first slot (x1) is fixed from outside, one value at a time; the other
//! eight digits are permuted in place over slots x2..x9 with the classic
//! lexicographic next-permutation step. Nothing is allocated per
//! assignment.

use crate::puzzle::{Assignment, MAX_DIGIT, MIN_DIGIT, SLOTS};
use std::ops::RangeInclusive;

/// Assignments produced for a single value of x1 (8!).
pub const PERMUTATIONS_PER_FIRST_VALUE: u64 = 40_320;

/// Rearrange `values` into the next lexicographically greater permutation.
///
/// Returns `false` (and leaves `values` sorted ascending) once the last
/// permutation has been passed.
pub fn next_permutation(values: &mut [u8]) -> bool {
    if values.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot + 1`.
    let mut pivot = values.len() - 1;
    while pivot > 0 && values[pivot - 1] >= values[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        values.reverse();
        return false;
    }
    let pivot = pivot - 1;

    let mut successor = values.len() - 1;
    while values[successor] <= values[pivot] {
        successor -= 1;
    }
    values.swap(pivot, successor);
    values[pivot + 1..].reverse();
    true
}

/// Digits for the first assignment with x1 = `first`: the remaining digits
/// follow in ascending order.
fn initial_digits(first: u8) -> [u8; SLOTS] {
    let mut digits = [first; SLOTS];
    let mut slot = 1;
    for digit in MIN_DIGIT..=MAX_DIGIT {
        if digit != first {
            digits[slot] = digit;
            slot += 1;
        }
    }
    digits
}

/// Iterator over every assignment whose first slot lies in a range of values.
///
/// Values of x1 are visited in ascending order; for each one the remaining
/// slots run through all 8! orderings lexicographically.
#[derive(Debug, Clone)]
pub struct Permutations {
    first_values: RangeInclusive<u8>,
    current: Option<[u8; SLOTS]>,
}

impl Permutations {
    pub fn new(first_values: RangeInclusive<u8>) -> Self {
        debug_assert!(
            first_values.is_empty()
                || (*first_values.start() >= MIN_DIGIT && *first_values.end() <= MAX_DIGIT),
            "first-slot values {first_values:?} outside the digit domain"
        );
        Self {
            first_values,
            current: None,
        }
    }
}

impl Iterator for Permutations {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        loop {
            if let Some(digits) = self.current.as_mut() {
                let assignment = Assignment::from_permutation(*digits);
                if !next_permutation(&mut digits[1..]) {
                    self.current = None;
                }
                return Some(assignment);
            }
            let first = self.first_values.next()?;
            self.current = Some(initial_digits(first));
        }
    }
}
