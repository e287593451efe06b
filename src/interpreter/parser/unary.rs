use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream, parse_expression},
            utils::{parse_comma_separated, parse_number},
        },
    },
};

/// Parses a unary expression.
///
/// Supports any number of leading `-` operators; `--3` is parsed as
/// `-(-3)`. Without a leading minus the function delegates to
/// [`parse_power`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned at the operand.
///
/// # Returns
/// An [`Expr::UnaryOp`] or the power-level expression.
pub(crate) fn parse_unary(tokens: &mut TokenStream) -> ParseResult<Expr> {
    if *tokens.current() == Token::Minus {
        tokens.advance()?;
        let operand = parse_unary(tokens)?;
        return Ok(Expr::unary(UnaryOperator::Negate, operand));
    }
    parse_power(tokens)
}

/// Parses exponentiation.
///
/// The exponent is itself a unary expression, which makes `^`
/// right-associative and lets it take a signed exponent: `2^3^2` is
/// `2^(3^2)` and `2^-1` is `0.5`. Since a leading minus is handled one
/// level up, `-2^2` is `-(2^2)`.
///
/// Grammar: `power := primary ("^" unary)?`
fn parse_power(tokens: &mut TokenStream) -> ParseResult<Expr> {
    let base = parse_primary(tokens)?;
    if *tokens.current() == Token::Caret {
        tokens.advance()?;
        let exponent = parse_unary(tokens)?;
        return Ok(Expr::binary(BinaryOperator::Pow, base, exponent));
    }
    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - number literals
/// - variables, assignments and function calls, all starting with an
///   identifier
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | identifier_or_function
///              | "(" expression ")"
/// ```
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary(tokens: &mut TokenStream) -> ParseResult<Expr> {
    match tokens.current() {
        Token::Number(_) => {
            let Token::Number(text) = tokens.advance()? else {
                unreachable!("current token was checked to be a number")
            };
            parse_number(&text)
        },
        Token::Identifier(_) => parse_identifier_or_function(tokens),
        Token::LParen => parse_grouping(tokens),
        _ => Err(tokens.unexpected()),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping(tokens: &mut TokenStream) -> ParseResult<Expr> {
    tokens.consume(&Token::LParen)?;
    let expr = parse_expression(tokens)?;
    tokens.consume(&Token::RParen)?;
    Ok(expr)
}

/// Parses an identifier, assignment, or function call.
///
/// Supported forms:
///
/// - `identifier`
/// - `identifier = expression`
/// - `identifier(arg1, arg2, ...)`
///
/// The right-hand side of an assignment is a full expression, so
/// `a = b = 1 + 2` assigns `3` to both `b` and `a`.
///
/// # Returns
/// - [`Expr::FunctionCall`] if followed by parentheses,
/// - [`Expr::Assignment`] if followed by `=`,
/// - [`Expr::Variable`] otherwise.
fn parse_identifier_or_function(tokens: &mut TokenStream) -> ParseResult<Expr> {
    let Token::Identifier(name) = tokens.consume(&Token::Identifier(String::new()))? else {
        unreachable!("consume only returns a token of the expected kind")
    };

    match tokens.current() {
        Token::LParen => {
            tokens.advance()?;
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            Ok(Expr::FunctionCall { name, arguments })
        },
        Token::Equals => {
            tokens.advance()?;
            let value = parse_expression(tokens)?;
            Ok(Expr::assignment(name, value))
        },
        _ => Ok(Expr::Variable(name)),
    }
}
