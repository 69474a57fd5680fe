//! Calculator errors.

use polynum_normalize::Operand;
use thiserror::Error;

use crate::op::OpKind;

/// Why an input was refused by `factorize`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FactorRejection {
    /// The input did not normalize to a number.
    #[error("factorization requires a numeric value")]
    NotNumeric,

    /// The input was NaN or infinite.
    #[error("factorization requires a finite value")]
    NotFinite,

    /// The input was zero or negative.
    #[error("factorization requires a positive integer")]
    NotPositive,

    /// The input was not within tolerance of an integer.
    #[error("factorization requires an integer")]
    NotInteger,

    /// The rounded input does not fit in a `u64`.
    #[error("value is too large to factorize")]
    OutOfRange,
}

/// Errors that can occur during a calculator operation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CalcError {
    /// An operand did not normalize to a number.
    #[error("cannot {op} unparsed values: {lhs}, {rhs}")]
    UnparsedOperand {
        /// The operation that was attempted.
        op: OpKind,
        /// Left operand as given.
        lhs: Operand,
        /// Right operand as given.
        rhs: Operand,
    },

    /// The normalized divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// `factorize` refused its input.
    #[error("{reason}: {input}")]
    InvalidFactorizationInput {
        /// The operand as given.
        input: Operand,
        /// What was wrong with it.
        reason: FactorRejection,
    },
}

impl CalcError {
    /// Returns the rejection reason for a factorization error.
    #[must_use]
    pub fn factor_rejection(&self) -> Option<FactorRejection> {
        match self {
            CalcError::InvalidFactorizationInput { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
