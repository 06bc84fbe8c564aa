use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::evaluator::{
        binary::{power, scalar},
        core::EvalResult,
        function::{builtin, log, sqrt},
        unary,
    },
};

/// Native implementation of a whitelisted function.
///
/// Receives the evaluated arguments in source order. The argument count has
/// already been checked against the function's [`Arity`].
pub type NativeFn = fn(&[f64]) -> EvalResult<f64>;

/// Native implementation of a binary operator.
pub type BinaryFn = fn(f64, f64) -> EvalResult<f64>;

/// Native implementation of a unary operator.
pub type UnaryFn = fn(f64) -> EvalResult<f64>;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `Range(min, max)` means any count from `min` to `max`, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Range(usize, usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::policy::Arity;
    ///
    /// assert!(Arity::Range(1, 2).check(2));
    /// assert!(!Arity::Exact(1).check(0));
    /// ```
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Range(min, max) => min <= n && n <= max,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Range(min, max) => write!(f, "{min} to {max}"),
        }
    }
}

/// Defines the whitelisted functions by generating a lookup table and a name
/// list.
///
/// Each entry provides:
/// - a string name,
/// - an arity constraint,
/// - a function pointer implementing the function.
///
/// The macro produces:
/// - `FUNCTION_TABLE` (static table for lookup),
/// - `FUNCTION_NAMES` (public list of permitted names, in table order).
macro_rules! whitelist_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static FUNCTION_TABLE: &[FunctionDef] = &[
            $(
                FunctionDef { name: $name, arity: $arity, func: $func },
            )*
        ];

        /// Names of every permitted function, in table order.
        pub const FUNCTION_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

/// A whitelisted function.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDef {
    /// Name as written in expressions. Matching is case-sensitive.
    pub name:  &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    /// Native implementation.
    pub func:  NativeFn,
}

whitelist_functions! {
    "sqrt" => { arity: Arity::Exact(1),    func: sqrt::sqrt },
    "sin"  => { arity: Arity::Exact(1),    func: builtin::sin },
    "cos"  => { arity: Arity::Exact(1),    func: builtin::cos },
    "tan"  => { arity: Arity::Exact(1),    func: builtin::tan },
    "log"  => { arity: Arity::Range(1, 2), func: log::log },
    "abs"  => { arity: Arity::Exact(1),    func: builtin::abs },
}

/// A whitelisted binary operator.
#[derive(Debug, Clone, Copy)]
pub struct BinaryOperatorDef {
    pub op:   BinaryOperator,
    pub func: BinaryFn,
}

/// Every permitted binary operator.
pub static BINARY_OPERATORS: &[BinaryOperatorDef] =
    &[BinaryOperatorDef { op:   BinaryOperator::Add,
                          func: scalar::add, },
      BinaryOperatorDef { op:   BinaryOperator::Sub,
                          func: scalar::sub, },
      BinaryOperatorDef { op:   BinaryOperator::Mul,
                          func: scalar::mul, },
      BinaryOperatorDef { op:   BinaryOperator::Div,
                          func: scalar::div, },
      BinaryOperatorDef { op:   BinaryOperator::Mod,
                          func: scalar::modulo, },
      BinaryOperatorDef { op:   BinaryOperator::Pow,
                          func: power::pow, }];

/// A whitelisted unary operator.
#[derive(Debug, Clone, Copy)]
pub struct UnaryOperatorDef {
    pub op:   UnaryOperator,
    pub func: UnaryFn,
}

/// Every permitted unary operator.
pub static UNARY_OPERATORS: &[UnaryOperatorDef] =
    &[UnaryOperatorDef { op:   UnaryOperator::Plus,
                         func: unary::identity, },
      UnaryOperatorDef { op:   UnaryOperator::Negate,
                         func: unary::negate, }];

/// Looks up a function by name.
///
/// # Example
/// ```
/// use safecalc::interpreter::policy::{Arity, function};
///
/// assert_eq!(function("log").map(|f| f.arity), Some(Arity::Range(1, 2)));
/// assert!(function("open").is_none());
/// ```
#[must_use]
pub fn function(name: &str) -> Option<&'static FunctionDef> {
    FUNCTION_TABLE.iter().find(|def| def.name == name)
}

/// Returns the accepted argument counts of a permitted function.
#[must_use]
pub fn arity(name: &str) -> Option<Arity> {
    function(name).map(|def| def.arity)
}

/// Looks up the native implementation of a binary operator.
#[must_use]
pub fn binary_operator(op: BinaryOperator) -> Option<BinaryFn> {
    BINARY_OPERATORS.iter().find(|def| def.op == op).map(|def| def.func)
}

/// Looks up the native implementation of a unary operator.
#[must_use]
pub fn unary_operator(op: UnaryOperator) -> Option<UnaryFn> {
    UNARY_OPERATORS.iter().find(|def| def.op == op).map(|def| def.func)
}
