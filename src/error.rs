/// Lexing errors.
///
/// Raised by the tokenizer when a character cannot start any token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// an expression tree: unexpected tokens, malformed number literals, and lex
/// errors surfaced while the parser pulls tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Errors raised while evaluating an expression tree against the variable
/// environment.
pub mod runtime_error;
/// Command errors.
///
/// Errors raised while splitting a `:` command line into terms.
pub mod command_error;

pub use command_error::CommandError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure that can abort the processing of one input line.
///
/// The session driver reports these and moves on to the next line.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Self::Parse(ParseError::Lex(err))
    }
}
