/// Core evaluation logic and the variable environment.
///
/// Contains the main evaluation engine and the session-wide variable store.
pub mod core;

/// Binary operator evaluation logic.
///
/// Applies `+ - * / ^` with IEEE 754 floating-point semantics.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Function evaluation.
///
/// Holds the builtin table and dispatches calls by arity and name.
pub mod function;
