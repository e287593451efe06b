use thiserror::Error;

/// A character that cannot begin any token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unexpected character '{character}': no token starts with it")]
pub struct LexError {
    /// The offending character.
    pub character: char,
}
