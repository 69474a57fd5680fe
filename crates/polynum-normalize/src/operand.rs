//! Raw calculator operands.

use std::fmt;

/// A value supplied to the calculator before normalization.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// A native integer.
    Int(i64),
    /// A native floating-point number.
    Float(f64),
    /// Text that may hold a number-word or a decimal numeral.
    Text(String),
    /// A missing value.
    Null,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(i) => write!(f, "{i}"),
            Operand::Float(x) => write!(f, "{x}"),
            Operand::Text(s) => f.write_str(s),
            Operand::Null => f.write_str("null"),
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Int(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Int(i64::from(value))
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Int(i64::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Float(f64::from(value))
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<&String> for Operand {
    fn from(value: &String) -> Self {
        Operand::Text(value.clone())
    }
}

impl From<&Operand> for Operand {
    fn from(value: &Operand) -> Self {
        value.clone()
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Operand::Null, Into::into)
    }
}
