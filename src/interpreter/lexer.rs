use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in an expression line.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Numbers keep their source text; the parser decides whether the text is a
/// valid floating-point literal, which lets forms like `.5` and `5.` through.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\n\r\f\x0B]+")]
pub enum Token {
    /// Numeric literal tokens: any run of digits and dots, such as `3.14`,
    /// `.5` or `2.`.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens; variable or function names such as `x` or `log10`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
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
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// End of input. Never produced by logos itself; [`Tokenizer`] yields it
    /// once the source is exhausted.
    End,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) => write!(f, "{text}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Equals => write!(f, "="),
            Self::Comma => write!(f, ","),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// A lazy, forward-only token source over one expression line.
///
/// Each call to [`Tokenizer::next_token`] lexes exactly one more token.
/// Characters past the point where the parser stops asking are never
/// inspected.
///
/// # Example
/// ```
/// use scalc::interpreter::lexer::{Token, Tokenizer};
///
/// let mut tokens = Tokenizer::new("x = .5");
/// assert_eq!(tokens.next_token().unwrap(), Token::Identifier("x".to_string()));
/// assert_eq!(tokens.next_token().unwrap(), Token::Equals);
/// assert_eq!(tokens.next_token().unwrap(), Token::Number(".5".to_string()));
/// assert_eq!(tokens.next_token().unwrap(), Token::End);
/// assert_eq!(tokens.next_token().unwrap(), Token::End);
/// ```
pub struct Tokenizer<'src> {
    lexer: logos::Lexer<'src, Token>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer(source) }
    }

    /// Produces the next token, or [`Token::End`] once the input is
    /// exhausted.
    ///
    /// # Errors
    /// Returns a [`LexError`] when the next non-whitespace character cannot
    /// start any token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.lexer.next() {
            Some(Ok(token)) => Ok(token),
            Some(Err(())) => {
                let character = self.lexer.slice().chars().next().unwrap_or('\u{FFFD}');
                Err(LexError { character })
            },
            None => Ok(Token::End),
        }
    }
}
