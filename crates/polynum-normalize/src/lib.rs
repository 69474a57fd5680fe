//! # polynum-normalize
//!
//! Converts heterogeneous operands (native numbers or number-word strings)
//! into `f64`.
//!
//! Normalization never fails. An operand that cannot be read as a number is
//! handed back unchanged inside [`Normalized::Unparsed`], and the caller
//! decides what that means for its operation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod normalize;
pub mod numeral;
pub mod operand;

#[cfg(test)]
mod proptests;

pub use normalize::{normalize, normalize_text, Normalized};
pub use numeral::parse_numeral;
pub use operand::Operand;
