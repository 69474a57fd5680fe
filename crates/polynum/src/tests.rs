//! Integration tests across the polynum crates.

#[cfg(test)]
mod integration_tests {
    use crate::prelude::*;
    use crate::{add, div, factorize, mul, sub};
    use polynum_lexicon::{lexicon, WordTable};

    #[test]
    fn test_every_word_normalizes_through_the_calculator() {
        let calc = Calculator::new();
        for lang in Language::ALL {
            for &(word, value) in lang.table().words() {
                let shouted = format!(" {} ", word.to_uppercase());
                assert_eq!(
                    calc.add(shouted, 0).unwrap(),
                    f64::from(value),
                    "{lang}: {word}"
                );
            }
        }
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(add(2, 3).unwrap(), 5.0);
        assert_eq!(add("three", "4").unwrap(), 7.0);
        assert_eq!(add("two", "dos").unwrap(), 4.0);
        assert_eq!(add("hello", "world").unwrap(), "helloworld");
        assert_eq!(div(10, 0), Err(CalcError::DivisionByZero));
        assert_eq!(div("x", 2).unwrap(), 5.0);
        assert!(matches!(
            sub("foo", 1),
            Err(CalcError::UnparsedOperand { .. })
        ));
        assert_eq!(factorize(1).unwrap(), Vec::<u64>::new());
        assert_eq!(factorize(2).unwrap(), vec![2]);
        assert_eq!(factorize(12).unwrap(), vec![2, 2, 3]);
        assert_eq!(factorize("12").unwrap(), vec![2, 2, 3]);
        assert!(matches!(
            factorize(-4),
            Err(CalcError::InvalidFactorizationInput { .. })
        ));
        assert!(matches!(
            factorize(2.5),
            Err(CalcError::InvalidFactorizationInput { .. })
        ));
    }

    #[test]
    fn test_words_across_scripts() {
        assert_eq!(mul("четыре", "五").unwrap(), 20.0);
        assert_eq!(sub("X", "drei").unwrap(), 7.0);
        assert_eq!(factorize(mul("sechs", "siete").unwrap()).unwrap(), vec![2, 3, 7]);
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in [Operand::Int(42), Operand::Float(-0.5), Operand::from("ocho")] {
            let once = normalize(&input);
            let twice = normalize(&once.clone().into_operand());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_global_lexicon_is_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| lexicon() as *const Lexicon as usize))
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_merge_precedence_follows_table_order() {
        const A: WordTable = WordTable::new("a", &[("tri", 3)]);
        const B: WordTable = WordTable::new("b", &[("tri", 30)]);
        assert_eq!(Lexicon::from_tables([A, B]).get("tri"), Some(30));
        assert_eq!(Lexicon::from_tables([B, A]).get("tri"), Some(3));
    }

    #[test]
    fn test_apply_over_all_kinds() {
        let calc = Calculator::new();
        let results: Vec<Value> = OpKind::ALL
            .into_iter()
            .map(|kind| calc.apply(kind, "ocho", "dos").unwrap())
            .collect();
        assert_eq!(
            results,
            vec![
                Value::Number(10.0),
                Value::Number(6.0),
                Value::Number(16.0),
                Value::Number(4.0)
            ]
        );
    }
}
