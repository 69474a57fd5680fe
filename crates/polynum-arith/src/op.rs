//! Operation kinds and results.

use std::fmt;

use crate::error::CalcError;

/// A binary arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// a + b
    Add,
    /// a - b
    Sub,
    /// a * b
    Mul,
    /// a / b
    Div,
}

impl OpKind {
    /// All operation kinds.
    pub const ALL: [OpKind; 4] = [OpKind::Add, OpKind::Sub, OpKind::Mul, OpKind::Div];

    /// Returns the operation's short name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Sub => "sub",
            OpKind::Mul => "mul",
            OpKind::Div => "div",
        }
    }

    /// Applies the operation to two numbers.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] for `Div` with a zero divisor.
    pub fn eval(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            OpKind::Add => Ok(a + b),
            OpKind::Sub => Ok(a - b),
            OpKind::Mul => Ok(a * b),
            OpKind::Div => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The result of a binary operation.
///
/// Only `add` can produce `Text`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A numeric result.
    Number(f64),
    /// Concatenation of two unparsed text operands.
    Text(String),
}

impl Value {
    /// Returns the number, if this is numeric.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            Value::Text(_) => None,
        }
    }

    /// Returns the text, if this is a concatenation.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_number() == Some(*other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}
