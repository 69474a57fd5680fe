//! Prime factorization by trial division.
//!
//! Candidate divisors run upward from 2 while `d * d <= remaining`. Each
//! divisor is removed as often as it divides, so every recorded divisor is
//! prime and the output is non-decreasing. Whatever remains above 1 once
//! the loop ends is the last prime factor.
//!
//! Cost is `O(sqrt(n))` divisions in the worst case (n prime).

use num_traits::PrimInt;

use crate::error::FactorRejection;

// 2^64, the first float that does not fit in a u64.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Returns the prime factors of `n` with multiplicity, smallest first.
///
/// `n <= 1` yields an empty list.
pub fn trial_division<T: PrimInt>(n: T) -> Vec<T> {
    let mut factors = Vec::new();
    let mut remaining = n;
    let mut d = T::one() + T::one();

    // d <= remaining / d is d * d <= remaining without the overflow.
    while d <= remaining / d {
        while remaining % d == T::zero() {
            factors.push(d);
            remaining = remaining / d;
        }
        d = d + T::one();
    }

    if remaining > T::one() {
        factors.push(remaining);
    }

    factors
}

/// Relative closeness with no absolute floor.
fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    a == b || (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}

/// Checks that `value` is a positive integer within `rel_tol` and rounds it.
///
/// # Errors
///
/// Returns the reason the value cannot be factorized.
pub fn to_positive_integer(value: f64, rel_tol: f64) -> Result<u64, FactorRejection> {
    if value.is_nan() {
        return Err(FactorRejection::NotFinite);
    }
    if value <= 0.0 {
        return Err(FactorRejection::NotPositive);
    }
    if value.is_infinite() {
        return Err(FactorRejection::NotFinite);
    }

    let rounded = value.round();
    if !is_close(value, rounded, rel_tol) {
        return Err(FactorRejection::NotInteger);
    }
    if rounded >= U64_LIMIT {
        return Err(FactorRejection::OutOfRange);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(rounded as u64)
}
