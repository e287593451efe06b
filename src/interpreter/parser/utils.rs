use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, TokenStream},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// The opening delimiter must already be consumed. It repeatedly calls
/// `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. A comma
/// directly before the closing token is rejected, since the closing token
/// cannot start an item.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or the token after an
/// item is neither a comma nor `closing`.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    tokens: &mut TokenStream,
    parse_item: impl Fn(&mut TokenStream) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if tokens.current() == closing {
        tokens.advance()?;
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        if *tokens.current() == Token::Comma {
            tokens.advance()?;
        } else {
            tokens.consume(closing)?;
            return Ok(items);
        }
    }
}

/// Converts the text of a number token into a literal node.
///
/// Only the longest leading `digits[.digits]` part of the run is read, so
/// `1.2.3` is `1.2` and `1..2` is `1`; the rest of the run is dropped.
///
/// # Errors
/// Returns `ParseError::InvalidNumber` when that part holds no digit, as in
/// `.` or `..`.
pub(in crate::interpreter::parser) fn parse_number(text: &str) -> ParseResult<Expr> {
    let invalid = || ParseError::InvalidNumber { literal: text.to_string() };

    let end = text.find('.')
                  .and_then(|dot| text[dot + 1..].find('.').map(|next| dot + 1 + next))
                  .unwrap_or(text.len());
    let decimal = &text[..end];

    if !decimal.bytes().any(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    decimal.parse::<f64>().map(Expr::Number).map_err(|_| invalid())
}
