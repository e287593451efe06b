use thiserror::Error;

use crate::error::LexError;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The tokenizer hit a character it does not understand.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Found a token the grammar does not allow at this point.
    #[error("Unexpected token: {token}")]
    UnexpectedToken {
        /// The token encountered, rendered as source text (or
        /// `end of input`).
        token: String,
    },
    /// A run of digits and dots that is not a valid number, like `1.2.3`.
    #[error("Invalid number literal: {literal}")]
    InvalidNumber {
        /// The literal as written.
        literal: String,
    },
}
