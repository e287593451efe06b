use crate::{ast::BinaryOperator, interpreter::evaluator::core::Environment};

impl Environment {
    /// Applies a binary operator to two already evaluated operands.
    ///
    /// Arithmetic follows IEEE 754: dividing by zero gives an infinity or
    /// NaN rather than an error.
    ///
    /// # Example
    /// ```
    /// use scalc::{ast::BinaryOperator, interpreter::evaluator::core::Environment};
    ///
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Sub, 2.0, 3.0), -1.0);
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
    /// assert!(Environment::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
    /// assert!(Environment::eval_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Pow => left.powf(right),
        }
    }
}
