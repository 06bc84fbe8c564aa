/// Core parsing entry points.
///
/// Defines the parse result type, the depth guard and the top-level
/// `parse` function that checks for empty input and trailing tokens.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and power precedence levels.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix signs, number literals, parenthesized groups and function
/// calls.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides the comma-separated list helper used for call arguments.
pub mod utils;

pub use self::core::{Depth, ParseResult, Subtree, parse};
