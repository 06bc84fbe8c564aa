//! Property-based tests for the evaluation pipeline.

use proptest::prelude::*;
use safecalc::{
    Calculator,
    error::{ErrorKind, EvalError, ParseError},
    evaluate,
    preview::preview,
};

// Strings over the accepted alphabet plus a few characters outside it.
fn calculator_input() -> impl Strategy<Value = String> {
    "[0-9a-z+*/%^()., ×÷\\-_$=]{0,48}"
}

fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

proptest! {
    #[test]
    fn arbitrary_text_never_panics(s in any::<String>()) {
        let _ = evaluate(&s);
        let _ = preview(&Calculator::default(), &s);
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let _ = evaluate(&String::from_utf8_lossy(&bytes));
    }

    #[test]
    fn near_miss_input_never_panics(s in calculator_input()) {
        let _ = evaluate(&s);
    }

    #[test]
    fn evaluation_is_idempotent(s in calculator_input()) {
        let calc = Calculator::default();
        let first = format!("{:?}", calc.evaluate(&s));
        prop_assert_eq!(format!("{:?}", calc.evaluate(&s)), first);
    }

    #[test]
    fn caret_is_double_star(s in calculator_input()) {
        let spelled_out = s.replace('^', "**");
        prop_assert_eq!(format!("{:?}", evaluate(&s)), format!("{:?}", evaluate(&spelled_out)));
    }

    #[test]
    fn nesting_past_the_limit_is_a_parse_error(depth in 129usize..600) {
        let src = format!("{}2{}", "(".repeat(depth), ")".repeat(depth));
        let result = evaluate(&src);
        let too_deep = matches!(result, Err(EvalError::Parse(ParseError::TooDeep { .. })));
        prop_assert!(too_deep, "expected a nesting error, got {:?}", result);
    }

    #[test]
    fn sign_chains_past_the_limit_are_a_parse_error(depth in 129usize..2000) {
        let src = format!("{}7", "-".repeat(depth));
        prop_assert_eq!(evaluate(&src).map_err(|e| e.kind()), Err(ErrorKind::Parse));
    }

    #[test]
    fn integer_arithmetic_is_exact(a in small_int(), b in small_int()) {
        prop_assert_eq!(evaluate(&format!("{a} + {b}")), Ok((a + b) as f64));
        prop_assert_eq!(evaluate(&format!("{a} - {b}")), Ok((a - b) as f64));
        prop_assert_eq!(evaluate(&format!("{a} * {b}")), Ok((a * b) as f64));
    }

    #[test]
    fn modulo_takes_the_sign_of_the_divisor(a in small_int(), b in small_int()) {
        let result = evaluate(&format!("{a} % {b}"));
        if b == 0 {
            prop_assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::DivisionByZero));
        } else {
            prop_assert_eq!(result, Ok((((a % b) + b) % b) as f64));
        }
    }
}
