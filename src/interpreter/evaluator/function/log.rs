use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, ensure_defined},
            function::core::invalid_count,
        },
        policy::Arity,
    },
};

/// Computes a logarithm.
///
/// - With one argument: the natural logarithm `ln(value)`.
/// - With two arguments: the logarithm to `base`, computed as
///   `ln(value) / ln(base)`.
///
/// # Errors
/// - `DomainError` if `value` or `base` is zero or negative.
/// - `DivisionByZero` if `base` is one, since `ln(1) = 0`.
///
/// # Example
/// ```
/// use safecalc::interpreter::evaluator::function::log::log;
///
/// // log_e(e) = 1
/// let e = std::f64::consts::E;
/// assert!((log(&[e]).unwrap() - 1.0).abs() < 1e-12);
///
/// let r = log(&[8.0, 2.0]).unwrap();
/// assert!((r - 3.0).abs() < 1e-12);
/// ```
pub fn log(args: &[f64]) -> EvalResult<f64> {
    match *args {
        [value] => ln(value),
        [value, base] => {
            let ln_value = ln(value)?;
            let ln_base = ln(base)?;

            if ln_base == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            ensure_defined(ln_value / ln_base, args, "undefined logarithm")
        },
        _ => Err(invalid_count("log", Arity::Range(1, 2), args.len())),
    }
}

/// Natural logarithm of a positive number.
fn ln(x: f64) -> EvalResult<f64> {
    if x <= 0.0 {
        return Err(RuntimeError::domain("logarithm of a non-positive number"));
    }
    Ok(x.ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn base_ten_and_base_two() {
        assert!((log(&[1000.0, 10.0]).unwrap() - 3.0).abs() < 1e-12);
        assert!((log(&[0.25, 2.0]).unwrap() + 2.0).abs() < 1e-12);
        assert_eq!(log(&[1.0]), Ok(0.0));
    }

    #[test]
    fn non_positive_arguments_are_domain_errors() {
        assert_eq!(log(&[0.0]).map_err(|e| e.kind()), Err(ErrorKind::DomainError));
        assert_eq!(log(&[-1.0]).map_err(|e| e.kind()), Err(ErrorKind::DomainError));
        assert_eq!(log(&[8.0, 0.0]).map_err(|e| e.kind()), Err(ErrorKind::DomainError));
        assert_eq!(log(&[8.0, -2.0]).map_err(|e| e.kind()), Err(ErrorKind::DomainError));
    }

    #[test]
    fn base_one_divides_by_zero() {
        assert_eq!(log(&[8.0, 1.0]), Err(RuntimeError::DivisionByZero));
    }

    #[test]
    fn infinite_value_and_base_is_undefined() {
        let inf = f64::INFINITY;
        assert_eq!(log(&[inf, inf]).map_err(|e| e.kind()), Err(ErrorKind::DomainError));
    }
}
