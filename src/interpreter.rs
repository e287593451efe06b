/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, applies arithmetic, resolves and
/// assigns variables, and dispatches builtin function calls. It is the core
/// execution engine of the calculator.
///
/// # Responsibilities
/// - Evaluates every AST node variant.
/// - Owns the session's variable environment.
/// - Reports undefined variables and unknown functions.
pub mod evaluator;
/// The lexer module tokenizes expression text for the parser.
///
/// The lexer reads the raw line and produces tokens on demand: numbers,
/// identifiers, operators and delimiters.
///
/// # Responsibilities
/// - Converts the input characters into tokens.
/// - Skips whitespace.
/// - Reports characters that cannot start any token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Encodes operator precedence and associativity.
/// - Recognizes assignments and function calls at identifiers.
pub mod parser;
