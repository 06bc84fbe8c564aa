use thiserror::Error;

/// Lexing errors.
///
/// Raised while turning normalized text into tokens: characters outside the
/// accepted alphabet and number literals that cannot be represented.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the expression tree
/// from tokens: unexpected tokens, unbalanced parentheses, empty input,
/// trailing tokens and nesting that exceeds the configured limit.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: calls
/// rejected by the whitelist, division by zero and results that are undefined
/// over the reals.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the evaluation pipeline.
///
/// Each stage returns its own error type; `EvalError` composes them so the
/// pipeline can propagate with `?`. Use [`EvalError::kind`] for a flat
/// classification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The input contains a character or literal the lexer rejects.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression is well formed but cannot be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Flat classification of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Character outside the accepted alphabet or invalid number literal.
    Lex,
    /// Malformed syntax, including nesting beyond the limit.
    Parse,
    /// Operator absent from the whitelist.
    UnsupportedOperator,
    /// Call to a name absent from the function table.
    UnsupportedFunction,
    /// Call with an argument count outside the declared range.
    InvalidArgumentCount,
    /// Division or modulo by zero.
    DivisionByZero,
    /// Result undefined over the reals.
    DomainError,
    /// Hand-built tree deeper than the evaluator allows.
    EvaluationTooDeep,
}

impl EvalError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Lex => "LexError",
            Self::Parse => "ParseError",
            Self::UnsupportedOperator => "UnsupportedOperator",
            Self::UnsupportedFunction => "UnsupportedFunction",
            Self::InvalidArgumentCount => "InvalidArgumentCount",
            Self::DivisionByZero => "DivisionByZero",
            Self::DomainError => "DomainError",
            Self::EvaluationTooDeep => "EvaluationTooDeep",
        };
        write!(f, "{name}")
    }
}
