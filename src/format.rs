/// Decimal places kept for non-integral results.
pub const DISPLAY_PRECISION: usize = 10;

/// Formats a result for display.
///
/// Integral values are written without a fractional part. Everything else is
/// rounded to [`DISPLAY_PRECISION`] decimal places with trailing zeros removed.
/// Negative zero, and negative values that round to zero, are written as `0`.
///
/// # Example
/// ```
/// use safecalc::format::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
/// assert_eq!(format_number(2.5), "2.5");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.fract() == 0.0 {
        return if value == 0.0 { "0".to_string() } else { value.to_string() };
    }

    let rounded = format!("{value:.precision$}", precision = DISPLAY_PRECISION);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(6.0), "6");
        assert_eq!(format_number(-20.0), "-20");
        assert_eq!(format_number(1e16), "10000000000000000");
    }

    #[test]
    fn negative_zero_is_plain_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-1e-12), "0");
    }

    #[test]
    fn fractions_are_rounded_and_trimmed() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(2.0 / 3.0), "0.6666666667");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(1e-11), "0");
    }

    #[test]
    fn infinities_are_spelled_out() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }
}
