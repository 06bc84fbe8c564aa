use logos::Logos;

use crate::error::LexError;

/// Reason a slice of input could not become a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexFailure {
    /// No token starts with this character.
    #[default]
    UnexpectedCharacter,
    /// A number literal overflows `f64`.
    InvalidNumber,
}

/// Represents a lexical token in the normalized input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexFailure)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Identifier tokens; only ever meaningful as function names.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `**`
    #[token("**")]
    Pow,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// End of input. Never matched; appended by [`tokenize`].
    End,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(s) => write!(f, "'{s}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Percent => write!(f, "'%'"),
            Self::Pow => write!(f, "'**'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Parses a number literal from the current token slice.
///
/// # Returns
/// - `Ok(f64)`: The parsed value if it is finite.
/// - `Err(LexFailure::InvalidNumber)`: If the literal overflows.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexFailure> {
    let value: f64 = lex.slice().parse().map_err(|_| LexFailure::InvalidNumber)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LexFailure::InvalidNumber)
    }
}

/// Converts normalized input into tokens paired with their byte offsets.
///
/// Whitespace is skipped. The returned stream always ends with
/// [`Token::End`], positioned at the end of the input, so the parser can
/// detect trailing garbage.
///
/// # Errors
/// Returns a [`LexError`] for the first character that starts no token, or
/// for a number literal that does not fit a finite `f64`.
///
/// # Example
/// ```
/// use safecalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 ** 3").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Pow, 2),
///                 (Token::Number(3.0), 5),
///                 (Token::End, 6)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(LexFailure::InvalidNumber) => {
                return Err(LexError::InvalidNumber { literal: lexer.slice().to_string(),
                                                     position });
            },
            Err(LexFailure::UnexpectedCharacter) => {
                let character = source.get(position..)
                                      .and_then(|rest| rest.chars().next())
                                      .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnexpectedCharacter { character, position });
            },
        }
    }

    tokens.push((Token::End, source.len()));
    Ok(tokens)
}
