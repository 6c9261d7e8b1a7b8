//! The snake puzzle: nine slots, the digits 1-9, and one equation read two ways.
//!
//! ```text
//! x1 + 13 * x2 / x3 + x4 + 12 * x5 - x6 - 11 + x7 * x8 / x9 - 10 = 66
//! ```
//!
//! Every digit is used exactly once. The equation is checked both as a
//! left-to-right chain (see [`Formula::Sequential`]) and under the usual
//! operator precedence (see [`Formula::Standard`]).

pub mod assignment;
pub mod formula;

pub use assignment::Assignment;
pub use formula::Formula;

/// Number of variable slots (x1..x9).
pub const SLOTS: usize = 9;

/// Smallest digit a slot can hold.
pub const MIN_DIGIT: u8 = 1;

/// Largest digit a slot can hold.
pub const MAX_DIGIT: u8 = 9;
