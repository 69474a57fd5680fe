//! Property-based tests for arithmetic and factorization.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{add, div, factorize, mul, sub, trial_division, CalcError, Operand, Value};

    fn is_prime(n: u64) -> bool {
        n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    proptest! {
        #[test]
        fn factors_multiply_back(n in 1u64..2_000_000u64) {
            let factors = trial_division(n);
            prop_assert_eq!(factors.iter().product::<u64>(), n);
        }

        #[test]
        fn factors_are_prime_and_sorted(n in 2u64..200_000u64) {
            let factors = trial_division(n);
            prop_assert!(!factors.is_empty());
            prop_assert!(factors.iter().all(|&p| is_prime(p)));
            prop_assert!(factors.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn factorize_text_matches_int(n in 1i64..100_000i64) {
            prop_assert_eq!(factorize(n.to_string()), factorize(n));
        }

        #[test]
        fn factorize_rejects_non_positive(n in -100_000i64..=0i64) {
            let rejected = matches!(
                factorize(n),
                Err(CalcError::InvalidFactorizationInput { .. })
            );
            prop_assert!(rejected);
        }

        #[test]
        fn add_commutative(a in small_int(), b in small_int()) {
            prop_assert_eq!(add(a, b), add(b, a));
        }

        #[test]
        fn add_matches_native(a in small_int(), b in small_int()) {
            #[allow(clippy::cast_precision_loss)]
            let expected = (a + b) as f64;
            prop_assert_eq!(add(a.to_string(), b).unwrap(), Value::Number(expected));
        }

        #[test]
        fn sub_mul_inverse_of_add(a in small_int(), b in small_int()) {
            let sum = add(a, b).unwrap().as_number().unwrap();
            prop_assert_eq!(sub(sum, b).unwrap(), a as f64);
            prop_assert_eq!(mul(a, 1).unwrap(), a as f64);
        }

        #[test]
        fn div_by_zero_always_errors(a in small_int()) {
            prop_assert_eq!(div(a, 0), Err(CalcError::DivisionByZero));
            prop_assert_eq!(div(a, "null"), Err(CalcError::DivisionByZero));
        }

        #[test]
        fn non_add_ops_reject_letters(s in "[qwz]{1,6}", b in small_int()) {
            let text = Operand::Text(s);
            prop_assert!(sub(text.clone(), b).is_err());
            prop_assert!(mul(text.clone(), b).is_err());
            prop_assert!(div(text, b).is_err());
        }

        #[test]
        fn add_concatenates_letters(a in "[qwz]{1,6}", b in "[qwz]{1,6}") {
            let expected = format!("{a}{b}");
            prop_assert_eq!(add(a, b).unwrap(), Value::Text(expected));
        }
    }
}
