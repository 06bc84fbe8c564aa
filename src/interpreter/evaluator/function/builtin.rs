use crate::{
    interpreter::{
        evaluator::{
            core::{EvalResult, ensure_defined},
            function::core::invalid_count,
        },
        policy::Arity,
    },
};

/// Defines a one-argument function that forwards to the `f64` method of the
/// same name.
///
/// The generated function accepts exactly one argument. A NaN result, such as
/// `sin` of an infinity, is reported as a domain error.
///
/// # Example
/// ```
/// use safecalc::interpreter::evaluator::function::builtin::cos;
///
/// assert_eq!(cos(&[0.0]), Ok(1.0));
/// ```
macro_rules! real_builtin {
    ($fname:ident) => {
        pub fn $fname(args: &[f64]) -> EvalResult<f64> {
            let &[x] = args else {
                return Err(invalid_count(stringify!($fname), Arity::Exact(1), args.len()));
            };
            ensure_defined(x.$fname(), args, concat!(stringify!($fname), " is undefined here"))
        }
    };
}

real_builtin!(sin);
real_builtin!(cos);
real_builtin!(tan);
real_builtin!(abs);
