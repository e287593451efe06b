use thiserror::Error;

/// Errors raised while tokenizing a `:` command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line ended while a `'` or `"` quote was still open.
    #[error("Unclosed quote in input string.")]
    UnclosedQuote {
        /// The quote character left open.
        quote: char,
    },
}
