//! Operand normalization.

use polynum_lexicon::lookup;

use crate::numeral::parse_numeral;
use crate::operand::Operand;

/// The outcome of normalizing an operand.
#[derive(Clone, Debug, PartialEq)]
pub enum Normalized {
    /// The operand denotes this number.
    Numeric(f64),
    /// The operand could not be read as a number; carries the original.
    Unparsed(Operand),
}

impl Normalized {
    /// Returns true if normalization produced a number.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Normalized::Numeric(_))
    }

    /// Returns the number, if any.
    #[must_use]
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Normalized::Numeric(v) => Some(*v),
            Normalized::Unparsed(_) => None,
        }
    }

    /// Converts back into an operand: numbers become `Float`, unparsed
    /// values are returned as they were given.
    #[must_use]
    pub fn into_operand(self) -> Operand {
        match self {
            Normalized::Numeric(v) => Operand::Float(v),
            Normalized::Unparsed(op) => op,
        }
    }
}

/// Normalizes an operand.
///
/// - `Int` and `Float` are returned as `f64`.
/// - `Text` is trimmed and lowercased, then resolved against the built-in
///   lexicon, then parsed as a decimal numeral.
/// - `Null` and text that fails both steps come back as `Unparsed`.
#[must_use]
pub fn normalize(operand: &Operand) -> Normalized {
    match operand {
        #[allow(clippy::cast_precision_loss)]
        Operand::Int(i) => Normalized::Numeric(*i as f64),
        Operand::Float(x) => Normalized::Numeric(*x),
        Operand::Text(s) => match normalize_text(s) {
            Some(v) => Normalized::Numeric(v),
            None => {
                tracing::debug!(text = %s, "operand is neither a number-word nor a numeral");
                Normalized::Unparsed(operand.clone())
            }
        },
        Operand::Null => Normalized::Unparsed(Operand::Null),
    }
}

/// Resolves text to a number: lexicon first, then numeral parsing.
#[must_use]
pub fn normalize_text(text: &str) -> Option<f64> {
    let folded = text.trim().to_lowercase();

    if let Some(v) = lookup(&folded) {
        return Some(f64::from(v));
    }

    parse_numeral(&folded)
}
