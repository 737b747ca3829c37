//! Unary operator implementations for the evaluator.

use oak_ir::UnaryOp;

use crate::errors::{integer_overflow, unsupported_unary, EvalResult};
use crate::Value;

/// Evaluate a prefix operator applied to an evaluated operand.
pub fn evaluate_unary(op: UnaryOp, value: &Value) -> EvalResult {
    match (op, value) {
        (UnaryOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (UnaryOp::Plus, Value::Int(n)) => Ok(Value::Int(*n)),
        // Doubles have no literal sign, so `-1.5` must negate at runtime.
        (UnaryOp::Neg, Value::Double(d)) => Ok(Value::Double(-d)),
        (UnaryOp::Plus, Value::Double(d)) => Ok(Value::Double(*d)),
        (UnaryOp::BitNot, Value::Int(n)) => Ok(Value::Int(!*n)),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!*b)),
        _ => Err(unsupported_unary(op, value)),
    }
}
