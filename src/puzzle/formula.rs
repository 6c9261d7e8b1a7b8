//! The two readings of the puzzle equation and their evaluation.
//!
//! Both readings are evaluated in `f64` and compared with `==` against
//! [`TARGET`]. There is no tolerance: an assignment matches only when the
//! rounded IEEE-754 result is exactly 66.0, so the operation order below must
//! not be rearranged.

use crate::puzzle::Assignment;

/// Value the equation must evaluate to.
pub const TARGET: f64 = 66.0;

/// Which reading of the equation an assignment is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Formula {
    /// Strict left-to-right chain, ignoring precedence:
    /// `((((((((((((x1+13)*x2)/x3)+x4)+12)*x5)-x6)-11)+x7)*x8)/x9)-10`
    Sequential,
    /// Conventional precedence:
    /// `x1 + 13*x2/x3 + x4 + 12*x5 - x6 - 11 + x7*x8/x9 - 10`
    Standard,
}

impl Formula {
    /// Both formulas, in the order they are checked for each assignment.
    pub const ALL: [Formula; 2] = [Formula::Sequential, Formula::Standard];

    pub fn evaluate(self, assignment: &Assignment) -> f64 {
        let [x1, x2, x3, x4, x5, x6, x7, x8, x9] = assignment.to_f64();
        match self {
            Formula::Sequential => {
                let mut acc = x1 + 13.0;
                acc *= x2;
                acc /= x3;
                acc += x4;
                acc += 12.0;
                acc *= x5;
                acc -= x6;
                acc -= 11.0;
                acc += x7;
                acc *= x8;
                acc /= x9;
                acc - 10.0
            }
            Formula::Standard => {
                x1 + 13.0 * x2 / x3 + x4 + 12.0 * x5 - x6 - 11.0 + x7 * x8 / x9 - 10.0
            }
        }
    }

    #[allow(clippy::float_cmp)]
    pub fn is_satisfied_by(self, assignment: &Assignment) -> bool {
        self.evaluate(assignment) == TARGET
    }

    /// Tag written in front of a solution line.
    pub fn tag(self) -> &'static str {
        match self {
            Formula::Sequential => "sequential",
            Formula::Standard => "standard",
        }
    }

    /// Single-letter tag: `S` for sequential, `O` for order of operations.
    pub fn short_tag(self) -> char {
        match self {
            Formula::Sequential => 'S',
            Formula::Standard => 'O',
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Formulas satisfied by `assignment`, sequential first.
pub fn matching_formulas(assignment: &Assignment) -> impl Iterator<Item = Formula> + '_ {
    Formula::ALL
        .into_iter()
        .filter(move |formula| formula.is_satisfied_by(assignment))
}
