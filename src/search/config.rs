//! Configuration types for the permutation search

use crate::error::SearchError;
use crate::puzzle::{MAX_DIGIT, MIN_DIGIT};

/// Inclusive range of values the first slot (x1) is allowed to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstSlotRange {
    start: u8,
    end: u8,
}

impl FirstSlotRange {
    /// The whole digit domain, 1..=9.
    pub const FULL: FirstSlotRange = FirstSlotRange {
        start: MIN_DIGIT,
        end: MAX_DIGIT,
    };

    /// Validate user-supplied bounds. Rejects `start > end` and any bound
    /// outside 1..=9.
    pub fn new(start: i64, end: i64) -> Result<Self, SearchError> {
        let domain = i64::from(MIN_DIGIT)..=i64::from(MAX_DIGIT);
        if start > end || !domain.contains(&start) || !domain.contains(&end) {
            return Err(SearchError::InvalidRange { start, end });
        }
        Ok(Self {
            start: start as u8,
            end: end as u8,
        })
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    /// Number of first-slot values in the range (never zero).
    pub fn value_count(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }
}

impl Default for FirstSlotRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl std::fmt::Display for FirstSlotRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Main search configuration
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Values of x1 to enumerate
    pub range: FirstSlotRange,
    /// Verbose output during search
    pub verbose: bool,
}

impl SearchConfig {
    pub fn with_range(mut self, range: FirstSlotRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Number of assignments a search over this configuration checks.
    pub fn total_checks(&self) -> u64 {
        self.range.value_count() as u64 * crate::search::permutation::PERMUTATIONS_PER_FIRST_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_range() {
        let range = FirstSlotRange::default();
        assert_eq!(range, FirstSlotRange::FULL);
        assert_eq!(range.value_count(), 9);
        assert_eq!(range.start(), 1);
        assert_eq!(range.to_string(), "1..=9");
    }

    #[test]
    fn test_sub_range() {
        let range = FirstSlotRange::new(3, 5).unwrap();
        assert_eq!(range.start(), 3);
        assert_eq!(range.to_string(), "3..=5");
        assert_eq!(range.value_count(), 3);

        let single = FirstSlotRange::new(7, 7).unwrap();
        assert_eq!(single.value_count(), 1);
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(matches!(
            FirstSlotRange::new(6, 2),
            Err(SearchError::InvalidRange { start: 6, end: 2 })
        ));
        assert!(FirstSlotRange::new(0, 9).is_err());
        assert!(FirstSlotRange::new(1, 10).is_err());
        assert!(FirstSlotRange::new(-3, 4).is_err());
        assert!(FirstSlotRange::new(300, 300).is_err());
    }

    #[test]
    fn test_search_config_builder() {
        let config = SearchConfig::default()
            .with_range(FirstSlotRange::new(2, 4).unwrap())
            .with_verbose(true);

        assert_eq!(config.range.value_count(), 3);
        assert!(config.verbose);
        assert_eq!(config.total_checks(), 3 * 40_320);
        assert_eq!(SearchConfig::default().total_checks(), 362_880);
    }
}
