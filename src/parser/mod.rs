//! Syntactic analysis
//!
//! Parses the token stream into statements, recovering at statement
//! boundaries so one pass reports every statement-level error.

mod ast;
mod descent;

pub use ast::{Expression, Statement};
pub use descent::Parser;
