//! # polynum
//!
//! A calculator that reads numbers the way people write them.
//!
//! Operands may be native numbers, decimal numerals, or number-words in
//! English, German, Spanish, Russian, Chinese, or Roman numerals up to X.
//! They are normalized to `f64` and then added, subtracted, multiplied,
//! divided, or factorized into primes.
//!
//! ## Quick Start
//!
//! ```
//! use polynum::prelude::*;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.add("three", "4").unwrap(), 7.0);
//! assert_eq!(calc.mul("zwei", "tres").unwrap(), 6.0);
//! assert_eq!(calc.factorize("12").unwrap(), vec![2, 2, 3]);
//! assert!(matches!(calc.div(10, 0), Err(CalcError::DivisionByZero)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polynum_arith as arith;
pub use polynum_lexicon as lexicon;
pub use polynum_normalize as normalize;

pub use polynum_arith::{add, div, factorize, mul, sub};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polynum_arith::{
        CalcError, Calculator, CalculatorConfig, FactorRejection, OpKind, Value,
    };
    pub use polynum_lexicon::{Language, Lexicon};
    pub use polynum_normalize::{normalize, Normalized, Operand};
}

#[cfg(test)]
mod tests;
