//! # scalc
//!
//! scalc is an interactive arithmetic evaluator written in Rust.
//! It parses and evaluates floating-point expressions with variables,
//! assignment and a fixed set of builtin functions, and drives them from a
//! line-oriented session that can source script files.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::Environment, parser::core::parse},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that
/// represent one input line as a tree. The AST is built by the parser and
/// consumed by the evaluator.
pub mod ast;
/// Provides unified error types for lexing, parsing, evaluation and
/// command handling.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Gives every error the message shown after `Error: ` in the session.
/// - Collects them in one top-level `Error` for per-line recovery.
pub mod error;
/// The expression engine.
///
/// This module ties together lexing, parsing and evaluation. It exposes the
/// public API for turning a line of text into a number.
///
/// # Responsibilities
/// - Tokenizes expression text.
/// - Parses tokens into an AST honoring operator precedence.
/// - Evaluates the AST against the session's variables.
pub mod interpreter;
/// The interactive session.
///
/// Splits `:` command lines, dispatches commands, and feeds expression
/// lines from any stream into the expression engine.
pub mod repl;
/// General utilities.
///
/// Currently the `%g`-style number formatting used to print results.
pub mod util;

/// Parses and evaluates one expression against `env`.
///
/// Unlike a session line, the result is not stored in `Ans` unless the
/// expression assigns it.
///
/// # Errors
/// Returns a parse error for malformed input, or a runtime error for
/// undefined variables and unknown functions.
///
/// # Examples
/// ```
/// use scalc::{calculate, interpreter::evaluator::core::Environment};
///
/// let mut env = Environment::new();
/// assert_eq!(calculate("1 + 2 * 3", &mut env).unwrap(), 7.0);
/// assert_eq!(calculate("x = pow(2, 10)", &mut env).unwrap(), 1024.0);
/// assert_eq!(calculate("log(2, x)", &mut env).unwrap(), 10.0);
///
/// // 'y' was never assigned.
/// assert!(calculate("y + 1", &mut env).is_err());
/// ```
pub fn calculate(source: &str, env: &mut Environment) -> Result<f64, Error> {
    let expr = parse(source)?;
    Ok(env.eval(&expr)?)
}
