//! Binary operator implementations for the evaluator.
//!
//! Dispatch is on the runtime tags of both operands. There is no implicit
//! numeric promotion: `Int op Double` is unsupported. `+` with a `String` on
//! either side concatenates textual forms and wins over every other rule.

use oak_ir::BinaryOp;

use crate::errors::{
    division_by_zero, integer_overflow, modulo_by_zero, negative_exponent, shift_out_of_range,
    unsupported_operands, EvalResult,
};
use crate::Value;

/// Evaluate `left op right` with both operands already evaluated.
pub fn evaluate_binary(left: &Value, op: BinaryOp, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Str(_), _) | (_, Value::Str(_)) if op == BinaryOp::Add => {
            Ok(concat(left, right))
        }
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, op, *b),
        (Value::Double(a), Value::Double(b)) => eval_double_binary(*a, op, *b),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, op, *b),
        _ => Err(unsupported_operands(op, left, right)),
    }
}

/// Evaluate the operator part of `name op= value`.
///
/// Narrower than [`evaluate_binary`]: integer `+ - * / %` and string
/// concatenation only.
pub fn evaluate_compound(current: &Value, op: BinaryOp, value: &Value) -> EvalResult {
    match (current, value) {
        (Value::Str(_), _) | (_, Value::Str(_)) if op == BinaryOp::Add => {
            Ok(concat(current, value))
        }
        (Value::Int(a), Value::Int(b))
            if matches!(
                op,
                BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod
            ) =>
        {
            eval_int_binary(*a, op, *b)
        }
        _ => Err(unsupported_operands(op, current, value)),
    }
}

fn concat(left: &Value, right: &Value) -> Value {
    Value::string(format!("{left}{right}"))
}

// Integer operations

#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

fn eval_int_binary(a: i64, op: BinaryOp, b: i64) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_div(b), "division")
            }
        }
        BinaryOp::Mod => {
            if b == 0 {
                Err(modulo_by_zero())
            } else {
                checked_arith(a.checked_rem(b), "remainder")
            }
        }
        BinaryOp::Pow => {
            if b < 0 {
                return Err(negative_exponent());
            }
            let exp = u32::try_from(b).map_err(|_| integer_overflow("exponentiation"))?;
            checked_arith(a.checked_pow(exp), "exponentiation")
        }
        BinaryOp::BitAnd => Ok(Value::Int(a & b)),
        BinaryOp::BitOr => Ok(Value::Int(a | b)),
        BinaryOp::BitXor => Ok(Value::Int(a ^ b)),
        BinaryOp::Shl => shift_amount(b).map(|n| Value::Int(a << n)),
        BinaryOp::Shr => shift_amount(b).map(|n| Value::Int(a >> n)),
        BinaryOp::UShr => shift_amount(b).map(|n| {
            let bits = u64::from_ne_bytes(a.to_ne_bytes()) >> n;
            Value::Int(i64::from_ne_bytes(bits.to_ne_bytes()))
        }),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::And | BinaryOp::Or => {
            Err(unsupported_operands(op, &Value::Int(a), &Value::Int(b)))
        }
    }
}

/// Shift amounts must lie in `0..64`.
fn shift_amount(amount: i64) -> Result<u32, crate::EvalError> {
    u32::try_from(amount)
        .ok()
        .filter(|n| *n < i64::BITS)
        .ok_or_else(|| shift_out_of_range(amount))
}

// Double operations

#[allow(clippy::float_cmp, reason = "language equality is IEEE equality")]
fn eval_double_binary(a: f64, op: BinaryOp, b: f64) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Double(a + b)),
        BinaryOp::Sub => Ok(Value::Double(a - b)),
        BinaryOp::Mul => Ok(Value::Double(a * b)),
        BinaryOp::Div => {
            if b == 0.0 {
                Err(division_by_zero())
            } else {
                Ok(Value::Double(a / b))
            }
        }
        BinaryOp::Mod => {
            if b == 0.0 {
                Err(modulo_by_zero())
            } else {
                Ok(Value::Double(a % b))
            }
        }
        BinaryOp::Pow => {
            if b < 0.0 {
                Err(negative_exponent())
            } else {
                Ok(Value::Double(a.powf(b)))
            }
        }
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::And
        | BinaryOp::Or
        | BinaryOp::BitAnd
        | BinaryOp::BitOr
        | BinaryOp::BitXor
        | BinaryOp::Shl
        | BinaryOp::Shr
        | BinaryOp::UShr => Err(unsupported_operands(
            op,
            &Value::Double(a),
            &Value::Double(b),
        )),
    }
}

// Boolean operations

/// Both operands are already evaluated; `&&` and `||` do not short-circuit.
fn eval_bool_binary(a: bool, op: BinaryOp, b: bool) -> EvalResult {
    match op {
        BinaryOp::And | BinaryOp::BitAnd => Ok(Value::Bool(a & b)),
        BinaryOp::Or | BinaryOp::BitOr => Ok(Value::Bool(a | b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        _ => Err(unsupported_operands(op, &Value::Bool(a), &Value::Bool(b))),
    }
}
