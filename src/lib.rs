//! # safecalc
//!
//! safecalc is a sandboxed arithmetic expression evaluator written in Rust.
//! It is built for calculator front ends that re-evaluate the input on every
//! keystroke: it accepts numbers, `+ - * / % **`, parentheses and six
//! whitelisted functions, and nothing else. Malformed or hostile input fails
//! with a typed error; it never executes anything and never panics.
//!
//! ```
//! assert_eq!(safecalc::evaluate("2 × (3 + 4)^2"), Ok(98.0));
//! assert!(safecalc::evaluate("__import__('os')").is_err());
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{debug, instrument, trace};

use crate::{
    ast::Expr,
    config::Config,
    error::EvalError,
    interpreter::{evaluator::core::Evaluator, lexer::tokenize, normalizer::normalize, parser},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an arithmetic expression as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the four node kinds an expression can consist of.
/// - Renders trees fully parenthesized for logs and diagnostics.
pub mod ast;
/// Settings shared by the parser and the evaluator.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while turning text into a
/// number. It standardizes error reporting and carries detailed information
/// about failures, including source offsets where they are known.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Composes them into `EvalError` and classifies them by `ErrorKind`.
pub mod error;
/// Display formatting of results.
pub mod format;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together normalization, lexing, parsing, the whitelist
/// policy and evaluation. Each stage is exposed on its own.
///
/// # Responsibilities
/// - Coordinates all core components: normalizer, lexer, parser, policy and
///   evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Live preview of partially typed input.
pub mod preview;

/// Evaluates arithmetic expressions with a fixed configuration.
///
/// A `Calculator` holds no state between calls; evaluating the same input
/// twice gives the same result. It is `Send + Sync` and cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculator {
    config:    Config,
    evaluator: Evaluator,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Calculator {
    /// Creates a calculator from a configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config,
               evaluator: Evaluator::new(config.max_depth) }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Normalizes, tokenizes and parses the input without evaluating it.
    ///
    /// # Example
    /// ```
    /// use safecalc::Calculator;
    ///
    /// let tree = Calculator::default().parse("-2^2").unwrap();
    /// assert_eq!(tree.to_string(), "((-2) ** 2)");
    /// ```
    pub fn parse(&self, source: &str) -> Result<Expr, EvalError> {
        let normalized = normalize(source);
        trace!(%normalized, "normalized input");

        let tokens = tokenize(&normalized)?;
        trace!(count = tokens.len(), "tokenized input");

        let tree = parser::parse(&tokens, self.config.max_depth)?;
        trace!(%tree, "parsed expression");

        Ok(tree)
    }

    /// Evaluates an already parsed tree.
    ///
    /// The tree is checked against the whitelist node by node, so hand-built
    /// trees are as safe as parsed ones.
    pub fn evaluate_tree(&self, tree: &Expr) -> Result<f64, EvalError> {
        Ok(self.evaluator.evaluate(tree)?)
    }

    /// Parses and evaluates an expression.
    ///
    /// # Errors
    /// Returns an error if lexing, parsing or evaluation fails. Use
    /// [`EvalError::kind`] to tell the failures apart.
    ///
    /// # Example
    /// ```
    /// use safecalc::{Calculator, error::ErrorKind};
    ///
    /// let calc = Calculator::default();
    ///
    /// assert_eq!(calc.evaluate("log(8, 2)").map(f64::round), Ok(3.0));
    /// assert_eq!(calc.evaluate("1 / 0").unwrap_err().kind(), ErrorKind::DivisionByZero);
    /// ```
    #[instrument(level = "debug", skip(self))]
    pub fn evaluate(&self, source: &str) -> Result<f64, EvalError> {
        let result = self.parse(source)
                         .and_then(|tree| self.evaluate_tree(&tree));

        match &result {
            Ok(value) => debug!(value, "evaluated"),
            Err(e) => debug!(kind = %e.kind(), error = %e, "evaluation failed"),
        }
        result
    }
}

/// Evaluates an expression with the default configuration.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use safecalc::evaluate;
///
/// assert_eq!(evaluate("2 + 4"), Ok(6.0));
/// assert_eq!(evaluate("2^3"), Ok(8.0));
///
/// // Anything outside arithmetic is rejected before evaluation.
/// assert!(evaluate("import os").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, EvalError> {
    Calculator::default().evaluate(source)
}
