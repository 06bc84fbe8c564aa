/// Trigonometric and absolute-value functions.
///
/// Thin wrappers over the `f64` methods that report undefined results.
pub mod builtin;
/// Logarithm function implementation.
///
/// Supports the natural logarithm and logarithms to an arbitrary base.
pub mod log;
/// The `sqrt` (square root) function implementation.
///
/// Computes real square roots of non-negative values.
pub mod sqrt;
/// Call evaluation.
///
/// Looks the name up in the whitelist, checks the argument count and invokes
/// the native implementation.
pub mod core;
