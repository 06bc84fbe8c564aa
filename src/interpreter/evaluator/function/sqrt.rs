use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::invalid_count},
        policy::Arity,
    },
};

/// Computes the square root of a non-negative value.
///
/// Negative inputs have no real square root and produce a `DomainError`.
///
/// # Parameters
/// - `args`: Slice holding exactly one argument.
///
/// # Example
/// ```
/// use safecalc::interpreter::evaluator::function::sqrt::sqrt;
///
/// assert_eq!(sqrt(&[9.0]), Ok(3.0));
/// assert!(sqrt(&[-4.0]).is_err());
/// ```
pub fn sqrt(args: &[f64]) -> EvalResult<f64> {
    let &[x] = args else {
        return Err(invalid_count("sqrt", Arity::Exact(1), args.len()));
    };
    if x < 0.0 {
        return Err(RuntimeError::domain("square root of a negative number"));
    }
    Ok(x.sqrt())
}
