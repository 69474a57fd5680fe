//! Decimal numeral parsing.
//!
//! Accepts what a plain decimal float literal looks like: optional sign,
//! integer and/or fractional digits, optional exponent, and the `inf`,
//! `infinity` and `nan` spellings. A single `_` is allowed between two
//! digits as a separator.

use std::borrow::Cow;

/// Parses a trimmed, lowercased numeral into an `f64`.
///
/// Returns `None` for anything that is not a complete numeral.
#[must_use]
pub fn parse_numeral(s: &str) -> Option<f64> {
    let s = strip_digit_separators(s)?;
    s.parse::<f64>().ok()
}

/// Removes `_` separators, rejecting any that are not flanked by digits.
fn strip_digit_separators(s: &str) -> Option<Cow<'_, str>> {
    if !s.contains('_') {
        return Some(Cow::Borrowed(s));
    }

    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        let flanked = before.is_some_and(|c| c.is_ascii_digit())
            && after.is_some_and(|c| c.is_ascii_digit());
        if !flanked {
            return None;
        }
    }

    Some(Cow::Owned(s.replace('_', "")))
}
