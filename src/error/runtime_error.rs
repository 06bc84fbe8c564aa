use thiserror::Error;

use crate::{error::ErrorKind, interpreter::policy::Arity};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// The tree holds an operator the whitelist does not permit.
    #[error("Operator '{operator}' is not supported.")]
    UnsupportedOperator {
        /// The operator symbol.
        operator: String,
    },
    /// Called a function that is not on the whitelist.
    #[error("Function '{name}' is not supported.")]
    UnsupportedFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Function '{name}' expects {expected} argument(s), but {found} were given.")]
    InvalidArgumentCount {
        /// The name of the function.
        name:     String,
        /// The accepted argument counts.
        expected: Arity,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// Attempted division (or modulo) by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// The result is undefined over the reals.
    #[error("Math domain error: {details}.")]
    DomainError {
        /// What was undefined.
        details: String,
    },
    /// The tree nests deeper than the evaluator allows.
    #[error("Expression nests deeper than the limit of {limit}.")]
    TooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
}

impl RuntimeError {
    /// Shorthand for a [`RuntimeError::DomainError`].
    pub fn domain(details: impl Into<String>) -> Self {
        Self::DomainError { details: details.into() }
    }

    /// Returns the flat kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperator,
            Self::UnsupportedFunction { .. } => ErrorKind::UnsupportedFunction,
            Self::InvalidArgumentCount { .. } => ErrorKind::InvalidArgumentCount,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::DomainError { .. } => ErrorKind::DomainError,
            Self::TooDeep { .. } => ErrorKind::EvaluationTooDeep,
        }
    }
}
