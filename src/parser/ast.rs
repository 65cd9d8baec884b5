use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexer::Token;

/// Expression tree built by the parser.
///
/// Every node exclusively owns its children; the tree is finite,
/// acyclic, and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Two operands joined by an infix operator
    Binary {
        /// Left operand
        left: Box<Expression>,
        /// The operator token, kept for its kind and span
        operator: Token,
        /// Right operand
        right: Box<Expression>,
    },

    /// A parenthesized expression
    Grouping(Box<Expression>),

    /// A prefix operator applied to one operand
    Unary {
        /// The operator token (`!` or `-`)
        operator: Token,
        /// The operand it applies to
        operand: Box<Expression>,
    },

    /// `true` or `false`
    BoolLiteral(bool),

    /// `nil`
    NilLiteral,

    /// Numeric literal, already converted from its source lexeme
    NumberLiteral(f64),

    /// String literal body, verbatim
    StringLiteral(String),
}

/// Statements, in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// An expression evaluated for its effects; the value is discarded
    Expression(Expression),
    /// `print expr ;`
    Print(Expression),
}

impl fmt::Display for Expression {
    /// Prefix S-expression rendering, e.g. `(- (group (+ 1 2)) 3)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", operator.lexeme(), left, right),
            Expression::Grouping(inner) => write!(f, "(group {})", inner),
            Expression::Unary { operator, operand } => {
                write!(f, "({} {})", operator.lexeme(), operand)
            }
            Expression::BoolLiteral(value) => write!(f, "{}", value),
            Expression::NilLiteral => write!(f, "nil"),
            Expression::NumberLiteral(value) => write!(f, "{}", value),
            Expression::StringLiteral(text) => write!(f, "{}", text),
        }
    }
}
