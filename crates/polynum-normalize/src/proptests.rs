//! Property-based tests for normalization.

#[cfg(test)]
mod tests {
    use polynum_lexicon::Language;
    use proptest::prelude::*;

    use crate::{normalize, Normalized, Operand};

    // Strategy for picking any built-in (word, value) pair
    fn builtin_word() -> impl Strategy<Value = (&'static str, u32)> {
        let words: Vec<(&'static str, u32)> = Language::ALL
            .iter()
            .flat_map(|lang| lang.table().words().iter().copied())
            .collect();
        proptest::sample::select(words)
    }

    // Strategy for surrounding whitespace
    fn padding() -> impl Strategy<Value = String> {
        "[ \t\n]{0,3}"
    }

    proptest! {
        #[test]
        fn normalize_idempotent_on_floats(x in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            let once = normalize(&Operand::Float(x));
            let twice = normalize(&once.clone().into_operand());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalize_idempotent_on_ints(i in any::<i64>()) {
            let once = normalize(&Operand::Int(i));
            let twice = normalize(&once.clone().into_operand());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn int_text_matches_int(i in -1_000_000i64..1_000_000i64) {
            prop_assert_eq!(
                normalize(&Operand::Text(i.to_string())),
                normalize(&Operand::Int(i))
            );
        }

        #[test]
        fn words_ignore_case_and_padding(
            (word, value) in builtin_word(),
            upper in any::<bool>(),
            left in padding(),
            right in padding(),
        ) {
            let cased = if upper { word.to_uppercase() } else { word.to_string() };
            let input = Operand::Text(format!("{left}{cased}{right}"));
            prop_assert_eq!(normalize(&input), Normalized::Numeric(f64::from(value)));
        }

        #[test]
        fn alphabetic_garbage_is_unparsed(s in "[qwz]{2,8}") {
            let op = Operand::Text(s);
            prop_assert_eq!(normalize(&op), Normalized::Unparsed(op.clone()));
        }
    }
}
