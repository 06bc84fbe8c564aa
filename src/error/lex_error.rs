use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing.
///
/// Positions are byte offsets into the normalized input.
pub enum LexError {
    /// Found a character that starts no token.
    #[error("Error at position {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A number literal could not be represented as a finite value.
    #[error("Error at position {position}: Invalid number '{literal}'.")]
    InvalidNumber {
        /// The literal as written.
        literal:  String,
        /// Byte offset where the literal starts.
        position: usize,
    },
}

impl LexError {
    /// Byte offset where lexing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. } | Self::InvalidNumber { position, .. } => {
                *position
            },
        }
    }
}
