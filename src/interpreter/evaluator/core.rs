use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Tree-walking evaluator.
///
/// The evaluator holds no state besides its depth limit, so one instance can
/// be shared freely between threads and calls. Every operator and function is
/// looked up in the [policy](crate::interpreter::policy); nodes the policy
/// does not know are rejected, never executed.
///
/// ## Depth guard
///
/// The root is evaluated at level 1 and every child one level deeper. A node
/// below `max_depth` fails with [`RuntimeError::TooDeep`]. Trees produced by
/// the parser with the same limit never reach it; the guard only matters for
/// trees built by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    max_depth: usize,
}

impl Evaluator {
    /// Creates an evaluator that accepts trees up to `max_depth` levels.
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// The configured depth limit.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Evaluates an expression tree to a number.
    ///
    /// # Errors
    /// Any [`RuntimeError`]: operators or functions absent from the policy,
    /// wrong argument counts, division by zero, domain errors and trees deeper
    /// than the limit.
    ///
    /// # Example
    /// ```
    /// use safecalc::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// let tree = Expr::binary(BinaryOperator::Mul, Expr::literal(6.0), Expr::literal(7.0));
    /// assert_eq!(Evaluator::new(128).evaluate(&tree), Ok(42.0));
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<f64> {
        self.eval(expr, 1)
    }

    /// Evaluates `expr` sitting at depth `level` of the tree.
    ///
    /// Dispatches on the node kind; children are evaluated at `level + 1`.
    pub(crate) fn eval(&self, expr: &Expr, level: usize) -> EvalResult<f64> {
        if level > self.max_depth {
            return Err(RuntimeError::TooDeep { limit: self.max_depth });
        }

        match expr {
            Expr::Literal { value } => Ok(*value),
            Expr::BinaryOp { op, left, right } => self.eval_binary_op(*op, left, right, level),
            Expr::UnaryOp { op, operand } => self.eval_unary_op(*op, operand, level),
            Expr::Call { name, args } => self.eval_call(name, args, level),
        }
    }
}

/// Rejects a NaN result computed from non-NaN inputs.
///
/// IEEE arithmetic answers undefined operations such as `inf - inf` or
/// `sin(inf)` with NaN instead of failing. Those are reported as
/// [`RuntimeError::DomainError`] with the given details.
///
/// # Example
/// ```
/// use safecalc::interpreter::evaluator::core::ensure_defined;
///
/// assert_eq!(ensure_defined(1.5, &[3.0, 2.0], "quotient"), Ok(1.5));
/// assert!(ensure_defined(f64::INFINITY - f64::INFINITY,
///                        &[f64::INFINITY, f64::INFINITY],
///                        "difference").is_err());
/// ```
pub fn ensure_defined(value: f64, inputs: &[f64], details: &str) -> EvalResult<f64> {
    if value.is_nan() && !inputs.iter().any(|x| x.is_nan()) {
        return Err(RuntimeError::domain(details));
    }
    Ok(value)
}
