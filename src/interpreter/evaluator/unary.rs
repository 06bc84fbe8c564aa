use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        policy,
    },
};

/// `+x`
pub const fn identity(value: f64) -> EvalResult<f64> {
    Ok(value)
}

/// `-x`
pub const fn negate(value: f64) -> EvalResult<f64> {
    Ok(-value)
}

impl Evaluator {
    /// Evaluates a unary operation node.
    ///
    /// The operand is evaluated one level deeper, then the operator is looked
    /// up in the whitelist and applied.
    pub(crate) fn eval_unary_op(&self,
                                op: UnaryOperator,
                                operand: &Expr,
                                level: usize)
                                -> EvalResult<f64> {
        let value = self.eval(operand, level + 1)?;

        Self::eval_unary(op, value)
    }

    /// Applies a unary operator to a number.
    ///
    /// # Example
    /// ```
    /// use safecalc::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Negate, 5.0), Ok(-5.0));
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Plus, -5.0), Ok(-5.0));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: f64) -> EvalResult<f64> {
        let func = policy::unary_operator(op).ok_or_else(|| {
                                                 RuntimeError::UnsupportedOperator { operator: op.to_string() }
                                             })?;
        func(value)
    }
}
