use crate::{ast::UnaryOperator, interpreter::evaluator::core::Environment};

impl Environment {
    /// Applies a unary operator to an evaluated operand.
    ///
    /// # Example
    /// ```
    /// use scalc::{ast::UnaryOperator, interpreter::evaluator::core::Environment};
    ///
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, operand: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -operand,
        }
    }
}
