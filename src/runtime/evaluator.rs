use super::value::Value;
use crate::error::RuntimeError;
use crate::lexer::{Token, TokenKind};
use crate::parser::{Expression, Statement};

/// Executes statements in source order, sending each `print` line
/// through the sink. Stops at the first runtime error; later statements
/// do not run.
pub struct Evaluator<F: FnMut(&str)> {
    sink: F,
}

impl<F: FnMut(&str)> Evaluator<F> {
    /// Creates an evaluator writing `print` output through `sink`, one
    /// call per line (without the line terminator).
    pub fn new(sink: F) -> Self {
        Evaluator { sink }
    }

    /// Runs the statements front to back
    pub fn execute(&mut self, statements: &[Statement]) -> Result<(), RuntimeError> {
        for statement in statements {
            self.execute_statement(statement)?;
        }
        Ok(())
    }

    fn execute_statement(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
        match statement {
            Statement::Expression(expression) => {
                evaluate_expression(expression)?;
            }
            Statement::Print(expression) => {
                let value = evaluate_expression(expression)?;
                (self.sink)(&value.to_string());
            }
        }
        Ok(())
    }
}

/// Evaluates a single expression.
///
/// Expression evaluation is pure; all effects live in statement
/// execution. Operands evaluate left to right, so the first ill-typed
/// operand is the one a `WrongType` error names.
pub fn evaluate_expression(expression: &Expression) -> Result<Value, RuntimeError> {
    match expression {
        Expression::BoolLiteral(value) => Ok(Value::Bool(*value)),
        Expression::NilLiteral => Ok(Value::Nil),
        Expression::NumberLiteral(value) => Ok(Value::Number(*value)),
        Expression::StringLiteral(text) => Ok(Value::String(text.clone())),
        Expression::Grouping(inner) => evaluate_expression(inner),
        Expression::Unary { operator, operand } => {
            let value = evaluate_expression(operand)?;
            match operator.kind {
                TokenKind::Bang => Ok(Value::Bool(!value.is_truthy())),
                TokenKind::Minus => Ok(Value::Number(-value.as_number()?)),
                // The parser only builds unary nodes for ! and -
                ref kind => unreachable!("unary operator {:?}", kind),
            }
        }
        Expression::Binary {
            left,
            operator,
            right,
        } => {
            let lhs = evaluate_expression(left)?;
            let rhs = evaluate_expression(right)?;
            apply_binary(lhs, operator, rhs)
        }
    }
}

fn apply_binary(lhs: Value, operator: &Token, rhs: Value) -> Result<Value, RuntimeError> {
    match operator.kind {
        TokenKind::Plus => add(lhs, rhs),
        TokenKind::Minus => Ok(Value::Number(lhs.as_number()? - rhs.as_number()?)),
        TokenKind::Star => Ok(Value::Number(lhs.as_number()? * rhs.as_number()?)),
        TokenKind::Slash => {
            let dividend = lhs.as_number()?;
            let divisor = rhs.as_number()?;
            if divisor == 0.0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Number(dividend / divisor))
            }
        }
        TokenKind::Less => Ok(Value::Bool(lhs.as_number()? < rhs.as_number()?)),
        TokenKind::LessEqual => Ok(Value::Bool(lhs.as_number()? <= rhs.as_number()?)),
        TokenKind::Greater => Ok(Value::Bool(lhs.as_number()? > rhs.as_number()?)),
        TokenKind::GreaterEqual => Ok(Value::Bool(lhs.as_number()? >= rhs.as_number()?)),
        // Structural equality never errors, whatever the operand types
        TokenKind::EqualEqual => Ok(Value::Bool(lhs == rhs)),
        TokenKind::BangEqual => Ok(Value::Bool(lhs != rhs)),
        // The parser only builds binary nodes for the operators above
        ref kind => unreachable!("binary operator {:?}", kind),
    }
}

/// `+` is overloaded: numeric addition or string concatenation. On a
/// mismatch the expected type comes from whichever operand pins it, and
/// the reported value is the one that did not fit.
fn add(lhs: Value, rhs: Value) -> Result<Value, RuntimeError> {
    match (lhs, rhs) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
        (Value::String(l), Value::String(r)) => Ok(Value::String(l + &r)),
        (Value::Number(_), other) | (other, Value::Number(_)) => Err(RuntimeError::WrongType {
            expected: "number",
            got: other,
        }),
        (Value::String(_), other) | (other, Value::String(_)) => Err(RuntimeError::WrongType {
            expected: "string",
            got: other,
        }),
        (other, _) => Err(RuntimeError::WrongType {
            expected: "number or string",
            got: other,
        }),
    }
}
