/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a closed sum type over exactly four node kinds. The grammar can
/// not produce anything else, so there is no generic node surface that the
/// evaluator would have to filter after the fact. A tree is never mutated once
/// built; the evaluator only borrows it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3` or `2.5`.
    Literal {
        /// The constant value.
        value: f64,
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
    /// A prefix sign applied to an operand.
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// Function call expression (e.g. `sqrt(9)`).
    ///
    /// The name is not checked by the parser; unknown names are rejected
    /// during evaluation.
    Call {
        /// Name of the function being called.
        name: String,
        /// Arguments, in source order.
        args: Vec<Self>,
    },
}

impl Expr {
    /// Creates a literal node.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal { value }
    }

    /// Creates a binary operation node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Creates a unary operation node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand) }
    }

    /// Creates a function call node.
    #[must_use]
    pub fn call(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Call { name: name.into(),
                     args }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floored modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
}

impl BinaryOperator {
    /// Returns the canonical source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl UnaryOperator {
    /// Returns the canonical source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Negate => "-",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Writes the tree fully parenthesized, so precedence and associativity are
/// visible in logs and test failures.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::UnaryOp { op, operand } => write!(f, "({op}{operand})"),
            Self::Call { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_makes_grouping_explicit() {
        let tree = Expr::binary(BinaryOperator::Mul,
                                Expr::binary(BinaryOperator::Add, Expr::literal(2.0), Expr::literal(3.0)),
                                Expr::unary(UnaryOperator::Negate, Expr::literal(4.0)));

        assert_eq!(tree.to_string(), "((2 + 3) * (-4))");
    }

    #[test]
    fn display_lists_call_arguments() {
        let tree = Expr::call("log", vec![Expr::literal(8.0), Expr::literal(2.0)]);

        assert_eq!(tree.to_string(), "log(8, 2)");
        assert_eq!(Expr::call("f", vec![]).to_string(), "f()");
    }

    #[test]
    fn power_symbol_is_canonical_double_star() {
        assert_eq!(BinaryOperator::Pow.to_string(), "**");
        assert_eq!(UnaryOperator::Negate.symbol(), "-");
    }
}
