//! Diagnostics for every stage of the pipeline.
//!
//! Scanning and parsing accumulate their diagnostics and keep going so a
//! single pass reports everything it can; evaluation stops at the first
//! runtime error. Every message leads with a source position, taken from
//! the span directly or from the offending token.

use std::fmt;

use thiserror::Error;

use crate::lexer::Token;
use crate::runtime::Value;
use crate::span::Span;

/// Lexical diagnostics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    /// A grapheme that starts no token
    #[error("Unexpected character '{grapheme}' at {span}")]
    UnexpectedCharacter {
        /// The offending grapheme cluster, verbatim
        grapheme: String,
        /// Where it sits in the source
        span: Span,
    },

    /// End of input arrived before a string literal's closing quote
    #[error("Unterminated string starting at {span}")]
    UnterminatedString {
        /// The opening quote's position
        span: Span,
    },
}

/// What the parser was in the middle of when it gave up on a statement
#[derive(Debug, Clone, PartialEq)]
pub enum ParseContext {
    /// Inside a parenthesized group; carries the opening `(` token
    ParsingGroup(Token),
    /// Inside a `print` statement
    ParsingPrint,
    /// Inside an expression statement
    ParsingExpression,
    /// A literal or `(` was expected
    ExpectingPrimary,
    /// An operand (possibly prefixed by `!` or `-`) was expected
    ExpectingUnaryOrPrimary,
    /// An expression was expected
    ExpectingExpression,
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseContext::ParsingGroup(open) => {
                write!(f, "in the group opened at {}", open.span)
            }
            ParseContext::ParsingPrint => write!(f, "in a print statement"),
            ParseContext::ParsingExpression => write!(f, "in an expression statement"),
            ParseContext::ExpectingPrimary => write!(f, "where a literal or '(' was expected"),
            ParseContext::ExpectingUnaryOrPrimary => write!(f, "where an operand was expected"),
            ParseContext::ExpectingExpression => write!(f, "where an expression was expected"),
        }
    }
}

/// Syntactic diagnostics, each tagged with its parser context
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The token stream ran out mid-production
    #[error("Unexpected end of input {context}")]
    UnexpectedEof {
        /// What was being parsed
        context: ParseContext,
    },

    /// A token that no production accepts here
    #[error("Unexpected token '{}' at {} {}", .token.kind, .token.span, .context)]
    UnexpectedToken {
        /// The token that was found
        token: Token,
        /// What was being parsed
        context: ParseContext,
    },

    /// A statement's trailing `;` is missing
    #[error("Expected ';' {context}")]
    MissingSemicolon {
        /// What was being parsed
        context: ParseContext,
    },
}

/// Evaluation failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// An operand had the wrong type for its operator
    #[error("Type error: expected {}, got {} '{}'", .expected, .got.type_name(), .got)]
    WrongType {
        /// What the operator needed, e.g. "number"
        expected: &'static str,
        /// The value that did not fit
        got: Value,
    },

    /// Division with a zero right operand
    #[error("Division by zero")]
    DivisionByZero,
}
