/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is a closed set of variants; the evaluator handles every one of
/// them in a single exhaustive `match`. Each node exclusively owns its
/// children, so a parsed line is a plain tree that is dropped after one
/// evaluation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// Reference to a variable by name.
    Variable(String),
    /// Binds `name` to the value of `value` and yields that value.
    Assignment {
        /// Name of the variable being assigned.
        name:  String,
        /// The right-hand side.
        value: Box<Self>,
    },
    /// Function call expression (e.g. `log(2, 8)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a [`Expr::BinaryOp`] node.
    ///
    /// ## Example
    /// ```
    /// use scalc::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(BinaryOperator::Add, Expr::Number(1.0), Expr::Number(2.0));
    /// assert_eq!(sum.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds a [`Expr::UnaryOp`] node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand) }
    }

    /// Builds a [`Expr::Assignment`] node.
    #[must_use]
    pub fn assignment(name: impl Into<String>, value: Self) -> Self {
        Self::Assignment { name:  name.into(),
                           value: Box::new(value), }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
///
/// The grammar only ever produces negation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}

/// Renders the tree fully parenthesized, which makes grouping visible.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Assignment { name, value } => write!(f, "({name} = {value})"),
            Self::FunctionCall { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::UnaryOp { op, operand } => write!(f, "({op}{operand})"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
