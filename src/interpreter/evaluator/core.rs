use std::collections::HashMap;

use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Name of the variable every bare expression line is stored into.
pub const ANSWER_VARIABLE: &str = "Ans";

/// Stores the variables of a session.
///
/// ## Usage
///
/// `Environment` is created once per session and threaded by mutable
/// reference through every line, including lines of sourced files, so a
/// value assigned anywhere is visible everywhere afterwards. A fresh
/// environment already binds `Ans` to `0`.
///
/// ## Example
/// ```
/// use scalc::{ast::Expr, interpreter::evaluator::core::Environment};
///
/// let mut env = Environment::new();
/// assert_eq!(env.get("Ans"), Some(0.0));
///
/// let value = env.eval(&Expr::assignment("x", Expr::Number(5.0))).unwrap();
/// assert_eq!(value, 5.0);
/// assert_eq!(env.get("x"), Some(5.0));
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only `Ans = 0`.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::from([(ANSWER_VARIABLE.to_string(), 0.0)]) }
    }

    /// Looks up a variable. Names are case-sensitive.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, creating or overwriting the binding.
    pub fn set(&mut self, name: &str, value: f64) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Children are
    /// evaluated depth-first, left to right. Assignments take effect as soon
    /// as their node is evaluated and stay in place even if a later part of
    /// the same expression fails.
    ///
    /// # Errors
    /// - `UndefinedVariable` when reading a name that was never assigned.
    /// - `UnknownFunction` when no builtin matches a call's name and arity.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number(value) => Ok(*value),
            Expr::Variable(name) => self.eval_variable(name),
            Expr::Assignment { name, value } => {
                let value = self.eval(value)?;
                self.set(name, value);
                Ok(value)
            },
            Expr::FunctionCall { name, arguments } => self.eval_function_call(name, arguments),
            Expr::UnaryOp { op, operand } => {
                let operand = self.eval(operand)?;
                Ok(Self::eval_unary(*op, operand))
            },
            Expr::BinaryOp { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, left, right))
            },
        }
    }

    fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }
}
