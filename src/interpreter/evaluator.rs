/// Binary operator evaluation logic.
///
/// Evaluates both operands and applies the whitelisted native operation:
/// arithmetic, floored modulo and exponentiation.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix signs: identity and arithmetic negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the main evaluation engine, the evaluation depth guard and the
/// check that turns undefined results into domain errors.
pub mod core;

/// Function evaluation.
///
/// Handles calls to whitelisted functions: name lookup, argument count
/// checking and the native implementations.
pub mod function;
