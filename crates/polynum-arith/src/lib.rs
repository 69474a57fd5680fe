//! # polynum-arith
//!
//! Arithmetic and prime factorization over normalized operands.
//!
//! Every operand goes through [`polynum_normalize::normalize`] first, so
//! `add("three", 4)` and `div("x", 2)` work the same as their numeric
//! forms. Addition alone is lenient: two text operands that are not numbers
//! are concatenated instead of rejected.
//!
//! ## Example
//!
//! ```
//! use polynum_arith::{add, div, factorize, Value};
//!
//! assert_eq!(add("two", "dos").unwrap(), Value::Number(4.0));
//! assert_eq!(add("hello", "world").unwrap(), Value::Text("helloworld".into()));
//! assert_eq!(div("x", 2).unwrap(), 5.0);
//! assert_eq!(factorize("12").unwrap(), vec![2, 2, 3]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calculator;
pub mod config;
pub mod error;
pub mod factor;
pub mod op;

#[cfg(test)]
mod proptests;

pub use calculator::{add, div, factorize, mul, sub, Calculator};
pub use config::{CalculatorConfig, DEFAULT_INTEGER_TOLERANCE};
pub use error::{CalcError, FactorRejection};
pub use factor::{to_positive_integer, trial_division};
pub use op::{OpKind, Value};
pub use polynum_normalize::Operand;
