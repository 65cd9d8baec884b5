//! Front end and tree-walking evaluator for the Lox scripting language.
//!
//! The crate covers scanning, parsing, and evaluation of Lox statements
//! (`print` and expression statements) with the classic interpreter
//! pipeline:
//!
//! ```text
//! source text → Scanner → tokens → Parser → statements → Evaluator → output lines
//! ```
//!
//! Scanning and parsing collect their diagnostics and keep going, so a
//! single pass reports every lexical and syntactic problem it can find;
//! evaluation stops at the first runtime error. Every diagnostic points
//! at the source through a [`Span`], directly or via the offending
//! token.
//!
//! Each stage is usable on its own; [`scan`], [`parse`], and
//! [`evaluate`] wire them together for callers that just want to run a
//! program:
//!
//! ```rust
//! use treelox::{evaluate, parse, scan};
//!
//! let (tokens, scan_diagnostics) = scan("print 1 + 2;");
//! assert!(scan_diagnostics.is_empty());
//!
//! let statements: Vec<_> = parse(tokens)
//!     .into_iter()
//!     .collect::<Result<_, _>>()
//!     .expect("program is well formed");
//!
//! let mut lines = Vec::new();
//! evaluate(&statements, |line| lines.push(line.to_string())).unwrap();
//! assert_eq!(lines, ["3"]);
//! ```

/// Diagnostics for every stage: scanning, parsing, evaluation
pub mod error;
/// Lexical analysis producing span-tagged tokens
pub mod lexer;
/// Recursive-descent parsing into expression and statement trees
pub mod parser;
/// Tree-walking evaluation over a dynamically typed value domain
pub mod runtime;
/// Source positions shared by tokens and diagnostics
pub mod span;

pub use error::{ParseContext, ParseError, RuntimeError, ScanError};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::{Expression, Parser, Statement};
pub use runtime::{evaluate_expression, Evaluator, Value};
pub use span::Span;

/// Scans `source` into a token stream ending with `Eof`, alongside any
/// lexical diagnostics. The token stream is best-effort: scanning
/// continues past bad input.
pub fn scan(source: &str) -> (Vec<Token>, Vec<ScanError>) {
    Scanner::new(source).scan_tokens()
}

/// Parses a token stream into one result per attempted statement,
/// resynchronizing at statement boundaries after each error.
pub fn parse(tokens: Vec<Token>) -> Vec<Result<Statement, ParseError>> {
    Parser::new(tokens).parse()
}

/// Executes statements in order, sending each `print` line to `sink`.
/// Stops at the first runtime error.
pub fn evaluate<F: FnMut(&str)>(statements: &[Statement], sink: F) -> Result<(), RuntimeError> {
    Evaluator::new(sink).execute(statements)
}

/// Renders an expression tree in prefix S-expression form, e.g.
/// `(- (group (+ 1 2)) 3)`.
pub fn expression_to_string(expression: &Expression) -> String {
    expression.to_string()
}
