use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// Arithmetic itself never fails: division by zero and out-of-domain
/// arguments follow IEEE 754 and produce infinities or NaN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// No builtin matches this name with this many arguments.
    #[error("Unknown function: {name} with {arity} argument(s)")]
    UnknownFunction {
        /// The name of the function.
        name:  String,
        /// The number of arguments supplied.
        arity: usize,
    },
}
