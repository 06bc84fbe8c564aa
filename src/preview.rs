use crate::{Calculator, error::EvalError, format::format_number};

/// Characters after which an expression is still being typed.
///
/// Covers the display glyphs as well as their canonical forms, so the check
/// can run on raw input.
pub const PENDING_SUFFIXES: &[char] = &['+', '-', '×', '÷', '*', '/', '%', '^', '(', ','];

/// What a live display should show for the current input.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Nothing has been typed.
    Empty,
    /// The input ends in an operator, an opening parenthesis or a comma; the
    /// expression is incomplete but not wrong.
    Pending,
    /// The input evaluated to this formatted number.
    Value(String),
    /// The input cannot be evaluated.
    Error(EvalError),
}

impl Preview {
    /// Text for a result display: the value, `0` while nothing can be shown,
    /// or `Error`.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Empty | Self::Pending => "0",
            Self::Value(value) => value,
            Self::Error(_) => "Error",
        }
    }
}

/// Computes the live preview for a partially typed expression.
///
/// Meant to run on every keystroke. Blank input and input ending in one of
/// [`PENDING_SUFFIXES`] are not evaluated at all.
///
/// # Example
/// ```
/// use safecalc::{
///     Calculator,
///     preview::{Preview, preview},
/// };
///
/// let calc = Calculator::default();
///
/// assert_eq!(preview(&calc, ""), Preview::Empty);
/// assert_eq!(preview(&calc, "2 ×"), Preview::Pending);
/// assert_eq!(preview(&calc, "2 × 3"), Preview::Value("6".to_string()));
/// assert_eq!(preview(&calc, "2 × )").text(), "Error");
/// ```
#[must_use]
pub fn preview(calculator: &Calculator, input: &str) -> Preview {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Preview::Empty;
    }
    if trimmed.ends_with(PENDING_SUFFIXES) {
        return Preview::Pending;
    }

    match calculator.evaluate(trimmed) {
        Ok(value) => Preview::Value(format_number(value)),
        Err(e) => Preview::Error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn show(input: &str) -> String {
        preview(&Calculator::default(), input).text().to_string()
    }

    #[test]
    fn typing_an_expression_key_by_key() {
        let typed = ["1", "12", "12÷", "12÷(", "12÷(5", "12÷(5-", "12÷(5-2", "12÷(5-2)"];
        let shown: Vec<String> = typed.iter().map(|input| show(input)).collect();

        assert_eq!(shown, ["1", "12", "0", "0", "Error", "0", "Error", "4"]);
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(preview(&Calculator::default(), "  \t"), Preview::Empty);
    }

    #[test]
    fn caret_and_comma_are_pending() {
        assert_eq!(preview(&Calculator::default(), "2^"), Preview::Pending);
        assert_eq!(preview(&Calculator::default(), "log(8,"), Preview::Pending);
    }

    #[test]
    fn errors_keep_their_kind() {
        let Preview::Error(e) = preview(&Calculator::default(), "1/0") else {
            panic!("expected an error preview");
        };
        assert_eq!(e.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn results_are_formatted() {
        assert_eq!(show("1/3"), "0.3333333333");
        assert_eq!(show("sqrt(16)"), "4");
    }
}
