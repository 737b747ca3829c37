//! Built-in methods on lists and strings.
//!
//! Dispatch is by receiver type, then by method name. Every method checks
//! its own argument count and types.

use std::cmp::Ordering;

use crate::errors::{
    element_not_found, incomparable_sort, index_out_of_bounds, invalid_substring, no_such_method,
    pop_from_empty, wrong_arg_count, wrong_arg_count_range, wrong_arg_type, EvalError, EvalResult,
};
use crate::value::ListValue;
use crate::Value;

/// Call `receiver.method(args)` for a built-in receiver type.
pub fn dispatch_builtin_method(receiver: &Value, method: &str, args: &[Value]) -> EvalResult {
    match receiver {
        Value::List(list) => dispatch_list_method(list, method, args),
        Value::Str(s) => dispatch_string_method(s, method, args),
        _ => Err(no_such_method(method, receiver.type_name())),
    }
}

/// Require exactly `expected` arguments.
#[inline]
fn require_args(method: &str, expected: usize, args: &[Value]) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(wrong_arg_count(method, expected, args.len()))
    }
}

fn require_int(method: &'static str, arg: &Value) -> Result<i64, EvalError> {
    arg.as_int()
        .ok_or_else(|| wrong_arg_type(method, "an Integer", arg))
}

/// Convert a language index into a position below `len`.
pub(crate) fn element_index(index: i64, len: usize) -> Result<usize, EvalError> {
    usize::try_from(index)
        .ok()
        .filter(|i| *i < len)
        .ok_or_else(|| index_out_of_bounds(index, len))
}

/// Element counts are exposed to programs as integers.
pub(crate) fn count_value(count: usize) -> Value {
    Value::Int(i64::try_from(count).unwrap_or(i64::MAX))
}

// List methods

fn dispatch_list_method(list: &ListValue, method: &str, args: &[Value]) -> EvalResult {
    match method {
        "append" => {
            require_args("append", 1, args)?;
            list.borrow_mut().extend(args.iter().cloned());
            Ok(Value::Null)
        }
        "pop" => {
            require_args("pop", 0, args)?;
            list.borrow_mut().pop().ok_or_else(pop_from_empty)
        }
        "remove" => {
            require_args("remove", 1, args)?;
            let index = require_int("remove", &args[0])?;
            let mut items = list.borrow_mut();
            let pos = element_index(index, items.len())?;
            Ok(items.remove(pos))
        }
        "insert" => {
            require_args("insert", 2, args)?;
            let index = require_int("insert", &args[0])?;
            let mut items = list.borrow_mut();
            // Inserting at `len` appends.
            let pos = usize::try_from(index)
                .ok()
                .filter(|i| *i <= items.len())
                .ok_or_else(|| index_out_of_bounds(index, items.len()))?;
            items.insert(pos, args[1].clone());
            Ok(Value::Null)
        }
        "clear" => {
            require_args("clear", 0, args)?;
            list.borrow_mut().clear();
            Ok(Value::Null)
        }
        "indexOf" => {
            require_args("indexOf", 1, args)?;
            let position = list.borrow().iter().position(|item| *item == args[0]);
            position.map(count_value).ok_or_else(element_not_found)
        }
        "contains" => {
            require_args("contains", 1, args)?;
            Ok(Value::Bool(list.borrow().contains(&args[0])))
        }
        "reverse" => {
            require_args("reverse", 0, args)?;
            list.borrow_mut().reverse();
            Ok(Value::Null)
        }
        "sort" => {
            require_args("sort", 0, args)?;
            sort_values(&mut list.borrow_mut())?;
            Ok(Value::Null)
        }
        _ => Err(no_such_method(method, "List")),
    }
}

/// Natural ordering between two values of the same sortable type.
fn natural_order(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Double(a), Value::Double(b)) => Some(a.total_cmp(b)),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Sort ascending; every adjacent pair must be mutually comparable, which
/// makes the whole list one sortable type.
fn sort_values(items: &mut [Value]) -> Result<(), EvalError> {
    if items
        .windows(2)
        .any(|pair| natural_order(&pair[0], &pair[1]).is_none())
    {
        return Err(incomparable_sort());
    }
    items.sort_by(|a, b| natural_order(a, b).unwrap_or(Ordering::Equal));
    Ok(())
}

// String methods

fn dispatch_string_method(s: &str, method: &str, args: &[Value]) -> EvalResult {
    match method {
        "length" => {
            require_args("length", 0, args)?;
            Ok(count_value(s.chars().count()))
        }
        "toUpperCase" => {
            require_args("toUpperCase", 0, args)?;
            Ok(Value::string(s.to_uppercase()))
        }
        "toLowerCase" => {
            require_args("toLowerCase", 0, args)?;
            Ok(Value::string(s.to_lowercase()))
        }
        "substring" => substring(s, args),
        "contains" => {
            require_args("contains", 1, args)?;
            let needle = args[0]
                .as_str()
                .ok_or_else(|| wrong_arg_type("contains", "a String", &args[0]))?;
            Ok(Value::Bool(s.contains(needle)))
        }
        _ => Err(no_such_method(method, "String")),
    }
}

/// `substring(start)` or `substring(start, end)`, in characters.
fn substring(s: &str, args: &[Value]) -> EvalResult {
    let len = s.chars().count();
    let (start, end) = match args {
        [start] => (
            require_int("substring", start)?,
            i64::try_from(len).unwrap_or(i64::MAX),
        ),
        [start, end] => (
            require_int("substring", start)?,
            require_int("substring", end)?,
        ),
        _ => return Err(wrong_arg_count_range("substring", 1, 2, args.len())),
    };
    let range = usize::try_from(start)
        .ok()
        .zip(usize::try_from(end).ok())
        .filter(|(from, to)| from <= to && *to <= len);
    match range {
        Some((from, to)) => Ok(Value::string(
            s.chars().skip(from).take(to - from).collect::<String>(),
        )),
        None => Err(invalid_substring(start, end, len)),
    }
}
