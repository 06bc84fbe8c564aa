/// Binary operation dispatch.
///
/// Evaluates both operands in order and applies the operator looked up in the
/// whitelist.
pub mod core;
/// Exponentiation.
///
/// Real powers with explicit errors for zero to a negative power, negative
/// bases with fractional exponents and overflow.
pub mod power;
/// Scalar arithmetic.
///
/// Addition, subtraction, multiplication, true division and floored modulo.
pub mod scalar;
