use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
///
/// Positions are byte offsets into the normalized input.
pub enum ParseError {
    /// The input holds no tokens at all.
    #[error("Error at position {position}: Empty expression.")]
    EmptyExpression {
        /// Offset of the end of input.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Offset of the token.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Offset of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' for the '(' opened here.")]
    ExpectedClosingParen {
        /// Offset of the unmatched opening parenthesis.
        position: usize,
    },
    /// A closing parenthesis `)` has no matching `(`.
    #[error("Error at position {position}: Closing parenthesis ')' without a matching '('.")]
    UnmatchedClosingParen {
        /// Offset of the closing parenthesis.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at position {position}: Extra tokens after expression, starting at {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Offset of the first extra token.
        position: usize,
    },
    /// An identifier was not followed by an argument list.
    #[error("Error at position {position}: '{name}' is not a value. Only function calls such as {name}(...) are allowed.")]
    BareIdentifier {
        /// The identifier.
        name:     String,
        /// Offset of the identifier.
        position: usize,
    },
    /// The expression nests deeper than the configured limit.
    #[error("Error at position {position}: Expression nests deeper than the limit of {limit}.")]
    TooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Offset of the token where the limit was exceeded.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::EmptyExpression { position }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnmatchedClosingParen { position }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::BareIdentifier { position, .. }
            | Self::TooDeep { position, .. } => *position,
        }
    }
}
