use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        policy,
    },
};

impl Evaluator {
    /// Evaluates a binary operation node.
    ///
    /// The left operand is evaluated fully before the right one, so when both
    /// sides fail the error of the left side is reported.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `level`: Depth of the operation node.
    pub(crate) fn eval_binary_op(&self,
                                 op: BinaryOperator,
                                 left: &Expr,
                                 right: &Expr,
                                 level: usize)
                                 -> EvalResult<f64> {
        let left = self.eval(left, level + 1)?;
        let right = self.eval(right, level + 1)?;

        Self::eval_binary(op, left, right)
    }

    /// Applies a binary operator to two numbers.
    ///
    /// The operator is looked up in the whitelist; an operator without an
    /// entry fails with `UnsupportedOperator`.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the result of `left op right`.
    ///
    /// # Example
    /// ```
    /// use safecalc::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Mod, -7.0, 3.0), Ok(2.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        let func = policy::binary_operator(op).ok_or_else(|| {
                                                  RuntimeError::UnsupportedOperator { operator: op.to_string() }
                                              })?;
        func(left, right)
    }
}
