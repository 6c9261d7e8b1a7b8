//! Digit assignments for the nine puzzle slots

use crate::error::SearchError;
use crate::puzzle::{MAX_DIGIT, MIN_DIGIT, SLOTS};

/// A bijection of the digits 1-9 onto the slots x1..x9, stored in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Assignment([u8; SLOTS]);

impl Assignment {
    /// Build an assignment, checking that every slot holds a distinct digit in 1..=9.
    pub fn new(values: [u8; SLOTS]) -> Result<Self, SearchError> {
        let mut seen = 0u16;
        for &value in &values {
            if !(MIN_DIGIT..=MAX_DIGIT).contains(&value) {
                return Err(SearchError::InvalidAssignment {
                    values,
                    reason: "digit outside 1..=9",
                });
            }
            let bit = 1u16 << value;
            if seen & bit != 0 {
                return Err(SearchError::InvalidAssignment {
                    values,
                    reason: "digit used more than once",
                });
            }
            seen |= bit;
        }
        Ok(Self(values))
    }

    /// Wrap digits produced by the permutation enumerator, which only ever
    /// permutes a valid starting array.
    pub(crate) fn from_permutation(values: [u8; SLOTS]) -> Self {
        debug_assert!(Self::new(values).is_ok(), "enumerator produced {values:?}");
        Self(values)
    }

    /// Slot values widened to `f64` for formula evaluation. The conversion is
    /// exact for every digit.
    pub fn to_f64(&self) -> [f64; SLOTS] {
        self.0.map(f64::from)
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Assignment {
    /// Digits in slot order x1..x9.
    pub fn values(&self) -> &[u8; SLOTS] {
        &self.0
    }

    /// Value of the externally partitioned slot (x1).
    pub fn first(&self) -> u8 {
        self.0[0]
    }
}
