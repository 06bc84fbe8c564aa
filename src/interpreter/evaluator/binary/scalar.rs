use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, ensure_defined},
};

/// Adds two numbers.
///
/// `inf + -inf` is undefined and fails with a domain error.
pub fn add(left: f64, right: f64) -> EvalResult<f64> {
    ensure_defined(left + right, &[left, right], "undefined sum")
}

/// Subtracts `right` from `left`.
pub fn sub(left: f64, right: f64) -> EvalResult<f64> {
    ensure_defined(left - right, &[left, right], "undefined difference")
}

/// Multiplies two numbers.
pub fn mul(left: f64, right: f64) -> EvalResult<f64> {
    ensure_defined(left * right, &[left, right], "undefined product")
}

/// True division.
///
/// The result is always a float: `7 / 2` is `3.5`.
///
/// # Errors
/// `DivisionByZero` when `right` is zero, of either sign.
///
/// # Example
/// ```
/// use safecalc::interpreter::evaluator::binary::scalar::div;
///
/// assert_eq!(div(7.0, 2.0), Ok(3.5));
/// assert!(div(1.0, -0.0).is_err());
/// ```
pub fn div(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    ensure_defined(left / right, &[left, right], "undefined quotient")
}

/// Floored modulo.
///
/// The result takes the sign of the divisor, so `-7 % 3` is `2` and
/// `7 % -3` is `-2`. This differs from Rust's `%`, which truncates. An exact
/// zero remainder also carries the divisor's sign.
///
/// # Errors
/// `DivisionByZero` when `right` is zero.
///
/// # Example
/// ```
/// use safecalc::interpreter::evaluator::binary::scalar::modulo;
///
/// assert_eq!(modulo(5.0, 2.0), Ok(1.0));
/// assert_eq!(modulo(-7.0, 3.0), Ok(2.0));
/// assert_eq!(modulo(7.0, -3.0), Ok(-2.0));
/// ```
pub fn modulo(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }

    let remainder = left % right;
    let floored = if remainder == 0.0 {
        0.0_f64.copysign(right)
    } else if (remainder < 0.0) != (right < 0.0) {
        remainder + right
    } else {
        remainder
    };
    ensure_defined(floored, &[left, right], "undefined remainder")
}
