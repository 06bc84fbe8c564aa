use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, ensure_defined},
};

/// Raises `base` to the power `exponent`.
///
/// Evaluated with `powf` after rejecting the cases that have no finite real
/// result.
///
/// # Errors
/// - `DivisionByZero` for zero raised to a negative power.
/// - `DomainError` for a negative base with a fractional exponent, which has
///   no real value.
/// - `DomainError` when finite operands overflow to infinity.
///
/// # Example
/// ```
/// use safecalc::interpreter::evaluator::binary::power::pow;
///
/// assert_eq!(pow(2.0, 3.0), Ok(8.0));
/// assert_eq!(pow(2.0, -1.0), Ok(0.5));
/// assert_eq!(pow(-8.0, 3.0), Ok(-512.0));
/// assert!(pow(-8.0, 0.5).is_err());
/// ```
pub fn pow(base: f64, exponent: f64) -> EvalResult<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(RuntimeError::domain("negative number raised to a fractional power"));
    }

    let result = base.powf(exponent);
    if result.is_infinite() && base.is_finite() && exponent.is_finite() {
        return Err(RuntimeError::domain("power result too large"));
    }
    ensure_defined(result, &[base, exponent], "undefined power")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn integral_and_fractional_powers() {
        assert_eq!(pow(2.0, 10.0), Ok(1024.0));
        assert_eq!(pow(9.0, 0.5), Ok(3.0));
        assert_eq!(pow(0.0, 0.0), Ok(1.0));
        assert_eq!(pow(-2.0, 2.0), Ok(4.0));
    }

    #[test]
    fn zero_to_a_negative_power_divides_by_zero() {
        assert_eq!(pow(0.0, -1.0), Err(RuntimeError::DivisionByZero));
        assert_eq!(pow(-0.0, -2.5), Err(RuntimeError::DivisionByZero));
    }

    #[test]
    fn negative_base_with_fractional_exponent_is_a_domain_error() {
        assert_eq!(pow(-1.0, 0.5).map_err(|e| e.kind()), Err(ErrorKind::DomainError));
    }

    #[test]
    fn finite_overflow_is_a_domain_error() {
        assert_eq!(pow(10.0, 400.0).map_err(|e| e.kind()), Err(ErrorKind::DomainError));
    }

    #[test]
    fn infinite_operands_pass_through() {
        assert_eq!(pow(f64::INFINITY, 2.0), Ok(f64::INFINITY));
        assert_eq!(pow(2.0, f64::NEG_INFINITY), Ok(0.0));
    }
}
