//! The calculator engine.

use polynum_normalize::{normalize, Normalized, Operand};

use crate::config::CalculatorConfig;
use crate::error::{CalcError, FactorRejection};
use crate::factor::{to_positive_integer, trial_division};
use crate::op::{OpKind, Value};

/// Normalizing calculator.
///
/// Holds no state besides its configuration; every call is independent.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    /// Creates a calculator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with the given configuration.
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Applies `kind` to two operands.
    ///
    /// # Errors
    ///
    /// See [`Calculator::add`] and [`Calculator::div`].
    pub fn apply(
        &self,
        kind: OpKind,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Value, CalcError> {
        match kind {
            OpKind::Add => self.add(a, b),
            OpKind::Sub | OpKind::Mul | OpKind::Div => {
                self.numeric(kind, a.into(), b.into()).map(Value::Number)
            }
        }
    }

    /// Adds two operands.
    ///
    /// When neither operand is a number and both are text, the original
    /// (untrimmed) strings are concatenated. If either operand normalizes
    /// to a number the other must too: `add("hello", "3")` is an error,
    /// not `"hello3"`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::UnparsedOperand`] when an operand did not
    /// normalize and the concatenation fallback does not apply.
    pub fn add(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Value, CalcError> {
        let lhs = a.into();
        let rhs = b.into();

        match (normalize(&lhs), normalize(&rhs)) {
            (Normalized::Numeric(x), Normalized::Numeric(y)) => Ok(Value::Number(x + y)),
            (Normalized::Unparsed(Operand::Text(l)), Normalized::Unparsed(Operand::Text(r))) => {
                tracing::debug!(lhs = %l, rhs = %r, "add fell back to concatenation");
                Ok(Value::Text(l + &r))
            }
            _ => Err(CalcError::UnparsedOperand {
                op: OpKind::Add,
                lhs,
                rhs,
            }),
        }
    }

    /// Subtracts `b` from `a`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::UnparsedOperand`] if either operand is not a number.
    pub fn sub(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<f64, CalcError> {
        self.numeric(OpKind::Sub, a.into(), b.into())
    }

    /// Multiplies two operands.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::UnparsedOperand`] if either operand is not a number.
    pub fn mul(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<f64, CalcError> {
        self.numeric(OpKind::Mul, a.into(), b.into())
    }

    /// Divides `a` by `b`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::UnparsedOperand`] if either operand is not a
    /// number, or [`CalcError::DivisionByZero`] if `b` normalizes to zero.
    pub fn div(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<f64, CalcError> {
        self.numeric(OpKind::Div, a.into(), b.into())
    }

    /// Returns the prime factors of `n`, smallest first, with multiplicity.
    ///
    /// `n` is normalized first and must then be a positive integer within
    /// the configured tolerance. `1` has no prime factors.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidFactorizationInput`] naming the reason.
    pub fn factorize(&self, n: impl Into<Operand>) -> Result<Vec<u64>, CalcError> {
        let input = n.into();

        let value = match normalize(&input) {
            Normalized::Numeric(v) => v,
            Normalized::Unparsed(_) => {
                return Err(CalcError::InvalidFactorizationInput {
                    input,
                    reason: FactorRejection::NotNumeric,
                })
            }
        };

        let n = match to_positive_integer(value, self.config.integer_tolerance) {
            Ok(n) => n,
            Err(reason) => return Err(CalcError::InvalidFactorizationInput { input, reason }),
        };

        let factors = trial_division(n);
        tracing::trace!(n, count = factors.len(), "factorized");
        Ok(factors)
    }

    fn numeric(&self, kind: OpKind, lhs: Operand, rhs: Operand) -> Result<f64, CalcError> {
        let (Normalized::Numeric(x), Normalized::Numeric(y)) = (normalize(&lhs), normalize(&rhs))
        else {
            return Err(CalcError::UnparsedOperand { op: kind, lhs, rhs });
        };
        kind.eval(x, y)
    }
}

/// Adds two operands with the default calculator.
///
/// # Errors
///
/// See [`Calculator::add`].
pub fn add(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Value, CalcError> {
    Calculator::default().add(a, b)
}

/// Subtracts with the default calculator.
///
/// # Errors
///
/// See [`Calculator::sub`].
pub fn sub(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<f64, CalcError> {
    Calculator::default().sub(a, b)
}

/// Multiplies with the default calculator.
///
/// # Errors
///
/// See [`Calculator::mul`].
pub fn mul(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<f64, CalcError> {
    Calculator::default().mul(a, b)
}

/// Divides with the default calculator.
///
/// # Errors
///
/// See [`Calculator::div`].
pub fn div(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<f64, CalcError> {
    Calculator::default().div(a, b)
}

/// Factorizes with the default calculator.
///
/// # Errors
///
/// See [`Calculator::factorize`].
pub fn factorize(n: impl Into<Operand>) -> Result<Vec<u64>, CalcError> {
    Calculator::default().factorize(n)
}
