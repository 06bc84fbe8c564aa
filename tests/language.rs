use std::{
    fs::{self},
    thread,
};

use safecalc::{
    Calculator,
    ast::{BinaryOperator, Expr, UnaryOperator},
    config::{Config, MAX_ALLOWED_DEPTH},
    error::{ErrorKind, EvalError, ParseError},
    evaluate,
};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

#[test]
fn case_files_evaluate_as_annotated() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, source, expected) in extract_cases(&content) {
            count += 1;
            let result = evaluate(source);
            let ok = match (&result, expected.parse::<f64>()) {
                (Ok(value), Ok(want)) => (value - want).abs() <= TOLERANCE,
                (Err(e), Err(_)) => e.kind().to_string() == expected,
                _ => false,
            };
            assert!(ok,
                    "case {}:{} `{}` expected {}, got {:?}",
                    path.display(),
                    line_no,
                    source,
                    expected,
                    result);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Splits `expression => expected` lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(usize, &str, &str)> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| {
               let trimmed = line.trim();
               !trimmed.is_empty() && !trimmed.starts_with('#')
           })
           .filter_map(|(i, line)| {
               line.rsplit_once("=>")
                   .map(|(source, expected)| (i + 1, source.trim(), expected.trim()))
           })
           .collect()
}

fn assert_value(src: &str, want: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - want).abs() <= TOLERANCE,
                             "`{src}` gave {value}, expected {want}"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_kind(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("`{src}` succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "`{src}` failed with {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("2+4", 6.0);
    assert_value("2 + 4", 6.0);
    assert_value("3*5", 15.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("10/2", 5.0);
    assert_value("5%2", 1.0);
}

#[test]
fn caret_and_double_star_are_the_same_operator() {
    assert_value("2**3", 8.0);
    assert_value("2^3", 8.0);
    assert_eq!(evaluate("3^2^2"), evaluate("3**2**2"));
}

#[test]
fn whitelisted_functions() {
    assert_value("sqrt(9)", 3.0);
    assert_value("sin(0)", 0.0);
    assert_value("cos(0)", 1.0);
    assert_value("log(8,2)", 3.0);
    assert_value("abs(-3)", 3.0);
}

#[test]
fn sign_binds_before_power() {
    assert_value("-2**2", 4.0);
    assert_value("2**-1", 0.5);
    assert_value("-(2**2)", -4.0);
}

#[test]
fn runtime_failures_are_classified() {
    assert_kind("1/0", ErrorKind::DivisionByZero);
    assert_kind("sqrt(1,2)", ErrorKind::InvalidArgumentCount);
    assert_kind("open(1)", ErrorKind::UnsupportedFunction);
    assert_kind("sqrt(-4)", ErrorKind::DomainError);
}

#[test]
fn code_injection_is_rejected_before_evaluation() {
    for src in ["\"hello\"",
                "import os",
                "os.system(\"ls\")",
                "__import__('os')",
                "().__class__",
                "lambda: 1",
                "[x for x in ()]",
                "eval('1')"]
    {
        let err = evaluate(src).expect_err(src);
        assert!(matches!(err.kind(), ErrorKind::Lex | ErrorKind::Parse),
                "`{src}` failed with {:?}, expected a lex or parse error",
                err.kind());
    }
}

#[test]
fn unknown_names_never_run() {
    assert_kind("exec(1)", ErrorKind::UnsupportedFunction);
    assert_kind("print(1)", ErrorKind::UnsupportedFunction);
    assert_kind("pow(2, 3)", ErrorKind::UnsupportedFunction);
}

#[test]
fn repeated_evaluation_is_idempotent() {
    let calc = Calculator::default();
    for src in ["1/3", "sqrt(2)", "log(", "1/0", "sin(cos(tan(1)))"] {
        let first = calc.evaluate(src);
        for _ in 0..5 {
            assert_eq!(calc.evaluate(src), first, "`{src}` changed between calls");
        }
    }
}

#[test]
fn nesting_beyond_the_limit_is_a_parse_error() {
    let src = format!("{}1{}", "(".repeat(500), ")".repeat(500));

    assert_kind(&src, ErrorKind::Parse);
    assert!(matches!(evaluate(&src),
                     Err(EvalError::Parse(ParseError::TooDeep { limit: 128, .. }))));
}

#[test]
fn nesting_limit_is_configurable() {
    let src = format!("{}1{}", "(".repeat(20), ")".repeat(20));
    let strict = Calculator::new(Config::default().with_max_depth(10));

    assert_value(&src, 1.0);
    assert_eq!(strict.evaluate(&src).unwrap_err().kind(), ErrorKind::Parse);
}

/// Runs `f` on a thread with the default 2 MiB stack of spawned threads.
fn on_spawned_thread<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    thread::Builder::new().stack_size(2 * 1024 * 1024)
                          .spawn(f)
                          .expect("failed to spawn thread")
                          .join()
                          .expect("evaluation thread panicked")
}

#[test]
fn deepest_allowed_nesting_fits_a_spawned_thread() {
    let parens = format!("{}1{}",
                         "(".repeat(MAX_ALLOWED_DEPTH),
                         ")".repeat(MAX_ALLOWED_DEPTH));
    let calls = format!("{}1{}",
                        "abs(".repeat(MAX_ALLOWED_DEPTH),
                        ")".repeat(MAX_ALLOWED_DEPTH));

    let (parens, calls) = on_spawned_thread(move || {
        let calc = Calculator::new(Config::default().with_max_depth(MAX_ALLOWED_DEPTH));
        (calc.evaluate(&parens), calc.evaluate(&calls).map_err(|e| e.kind()))
    });

    assert_eq!(parens, Ok(1.0));
    assert_eq!(calls, Err(ErrorKind::Parse));
}

#[test]
fn nesting_past_the_largest_limit_fails_on_a_spawned_thread() {
    let depth = MAX_ALLOWED_DEPTH + 1;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    let kind = on_spawned_thread(move || {
        Calculator::new(Config::default().with_max_depth(usize::MAX)).evaluate(&src)
                                                                     .map_err(|e| e.kind())
    });

    assert_eq!(kind, Err(ErrorKind::Parse));
}

#[test]
fn zero_remainder_is_positive_for_a_positive_divisor() {
    let value = evaluate("-6 % 3").unwrap();

    assert_eq!(value, 0.0);
    assert!(value.is_sign_positive());
}

#[test]
fn long_flat_chains_are_bounded_by_tree_height() {
    let short = vec!["1"; 100].join(" + ");
    let long = vec!["1"; 1000].join(" + ");

    assert_value(&short, 100.0);
    assert_kind(&long, ErrorKind::Parse);
}

#[test]
fn hand_built_trees_are_checked_too() {
    let calc = Calculator::default();

    let forbidden = Expr::call("system", vec![Expr::literal(1.0)]);
    assert_eq!(calc.evaluate_tree(&forbidden).unwrap_err().kind(),
               ErrorKind::UnsupportedFunction);

    let deep = (0..1000).fold(Expr::literal(1.0), |tree, _| {
                            Expr::unary(UnaryOperator::Negate, tree)
                        });
    assert_eq!(calc.evaluate_tree(&deep).unwrap_err().kind(),
               ErrorKind::EvaluationTooDeep);
}

#[test]
fn parse_then_evaluate_matches_evaluate() {
    let calc = Calculator::default();
    let tree = calc.parse("2 × (3 + 4)").unwrap();

    assert_eq!(tree,
               Expr::binary(BinaryOperator::Mul,
                            Expr::literal(2.0),
                            Expr::binary(BinaryOperator::Add, Expr::literal(3.0), Expr::literal(4.0))));
    assert_eq!(calc.evaluate_tree(&tree), calc.evaluate("2 × (3 + 4)"));
}

#[test]
fn errors_carry_offsets_into_the_input() {
    match evaluate("1 + $") {
        Err(EvalError::Lex(e)) => assert_eq!(e.position(), 4),
        other => panic!("expected a lex error, got {other:?}"),
    }
    match evaluate("(1 + 2") {
        Err(EvalError::Parse(e)) => assert_eq!(e.position(), 0),
        other => panic!("expected a parse error, got {other:?}"),
    }
}
