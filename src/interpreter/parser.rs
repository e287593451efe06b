/// Core parsing state and entry points.
///
/// Holds the one-token-lookahead stream the grammar functions share, and
/// the `parse` entry point used by the evaluator's callers.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence tiers: additive and
/// multiplicative.
pub mod binary;

/// Unary, power and primary parsing.
///
/// Handles negation, exponentiation, literals, variables, assignments,
/// function calls and parenthesized groups.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides comma-separated list parsing and number literal conversion.
pub mod utils;
