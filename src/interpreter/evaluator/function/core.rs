use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        policy::{self, Arity},
    },
};

impl Evaluator {
    /// Evaluates a function call node.
    ///
    /// Arguments are evaluated left to right, each one level deeper than the
    /// call. Only then is the name looked up in the whitelist, its argument
    /// count checked and the native implementation invoked.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Unevaluated argument expressions.
    /// - `level`: Depth of the call node.
    ///
    /// # Returns
    /// The function result or an error if evaluation, lookup or arity fails.
    pub(crate) fn eval_call(&self, name: &str, args: &[Expr], level: usize) -> EvalResult<f64> {
        let values = args.iter()
                         .map(|arg| self.eval(arg, level + 1))
                         .collect::<EvalResult<Vec<_>>>()?;

        Self::eval_function(name, &values)
    }

    /// Calls a whitelisted function on evaluated arguments.
    ///
    /// # Errors
    /// - `UnsupportedFunction` if the name is not in the whitelist.
    /// - `InvalidArgumentCount` if the count is outside the function's arity.
    /// - Any error raised by the function itself.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::evaluator::core::Evaluator;
    ///
    /// assert_eq!(Evaluator::eval_function("abs", &[-3.0]), Ok(3.0));
    /// assert!(Evaluator::eval_function("open", &[1.0]).is_err());
    /// ```
    pub fn eval_function(name: &str, args: &[f64]) -> EvalResult<f64> {
        let Some(def) = policy::function(name) else {
            return Err(RuntimeError::UnsupportedFunction { name: name.to_string() });
        };
        if !def.arity.check(args.len()) {
            return Err(invalid_count(def.name, def.arity, args.len()));
        }

        trace!(function = def.name, ?args, "calling whitelisted function");
        (def.func)(args)
    }
}

/// Builds the error for a call with the wrong number of arguments.
pub(crate) fn invalid_count(name: &str, expected: Arity, found: usize) -> RuntimeError {
    RuntimeError::InvalidArgumentCount { name: name.to_string(),
                                         expected,
                                         found }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_are_rejected_after_arguments() {
        let evaluator = Evaluator::new(16);
        let call = Expr::call("open", vec![Expr::literal(1.0)]);

        assert_eq!(evaluator.evaluate(&call),
                   Err(RuntimeError::UnsupportedFunction { name: "open".to_string() }));

        let failing_arg = Expr::call("open", vec![Expr::call("sqrt", vec![Expr::literal(-1.0)])]);
        assert_eq!(evaluator.evaluate(&failing_arg).map_err(|e| e.kind()),
                   Err(crate::error::ErrorKind::DomainError));
    }

    #[test]
    fn argument_count_is_checked_against_the_table() {
        assert_eq!(Evaluator::eval_function("sqrt", &[1.0, 2.0]),
                   Err(RuntimeError::InvalidArgumentCount { name:     "sqrt".to_string(),
                                                            expected: Arity::Exact(1),
                                                            found:    2, }));
        assert_eq!(Evaluator::eval_function("log", &[]).map_err(|e| e.kind()),
                   Err(crate::error::ErrorKind::InvalidArgumentCount));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(Evaluator::eval_function("SQRT", &[4.0]),
                   Err(RuntimeError::UnsupportedFunction { name: "SQRT".to_string() }));
    }
}
