use std::mem;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, Tokenizer},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A token stream with exactly one token of lookahead.
///
/// The stream pulls from the [`Tokenizer`] only when the current token is
/// consumed, so it never reads further into the line than the grammar
/// needs.
pub struct TokenStream<'src> {
    tokenizer: Tokenizer<'src>,
    current:   Token,
}

impl<'src> TokenStream<'src> {
    /// Creates a stream and lexes its first token.
    ///
    /// # Errors
    /// Returns a `ParseError::Lex` if the first token cannot be lexed.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut tokenizer = Tokenizer::new(source);
        let current = tokenizer.next_token()?;
        Ok(Self { tokenizer, current })
    }

    /// The token currently under the cursor.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Moves past the current token and returns it.
    ///
    /// # Errors
    /// Returns a `ParseError::Lex` if the following token cannot be lexed.
    pub fn advance(&mut self) -> ParseResult<Token> {
        let next = self.tokenizer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it has the same kind as `expected`.
    ///
    /// Only the variant is compared, so `Token::Number(String::new())`
    /// matches any number.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` naming the current token when
    /// the kinds differ.
    pub fn consume(&mut self, expected: &Token) -> ParseResult<Token> {
        if mem::discriminant(&self.current) == mem::discriminant(expected) {
            self.advance()
        } else {
            Err(self.unexpected())
        }
    }

    /// Builds an `UnexpectedToken` error for the current token.
    #[must_use]
    pub fn unexpected(&self) -> ParseError {
        ParseError::UnexpectedToken { token: self.current.to_string() }
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// infix precedence level, addition, and recursively descends through the
/// precedence hierarchy. Assignment is not an infix tier; it is recognized
/// where an identifier starts a primary.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first token of the
///   expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_additive(tokens)
}

/// Parses one line into an expression tree.
///
/// Parsing stops as soon as a complete expression has been read; anything
/// after it is left unread, so the tree always describes a valid prefix of
/// the line.
///
/// # Errors
/// Returns a `ParseError` for unknown characters, unexpected tokens, or
/// malformed number literals.
///
/// # Example
/// ```
/// use scalc::interpreter::parser::core::parse;
///
/// let expr = parse("1 + 2 * 3").unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
///
/// let expr = parse("Ans = x = 5").unwrap();
/// assert_eq!(expr.to_string(), "(Ans = (x = 5))");
///
/// assert!(parse("1 +").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let mut tokens = TokenStream::new(source)?;
    parse_expression(&mut tokens)
}
