//! Evaluation errors.
//!
//! Every runtime failure is an [`EvalError`] wrapping a structured
//! [`EvalErrorKind`]. Errors are built through the `#[cold]` factory
//! functions below rather than by constructing kinds inline, which keeps
//! the message text in one place.
//!
//! Kinds fall into three [`ErrorCategory`]s: arithmetic failures, the
//! call-depth limit, and everything else.

use oak_ir::{BinaryOp, IncDecOp, UnaryOp};

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Coarse classification of an [`EvalErrorKind`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCategory {
    Runtime,
    Arithmetic,
    StackOverflow,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("negative exponent is not supported")]
    NegativeExponent,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("shift amount {amount} is out of range 0..64")]
    ShiftOutOfRange { amount: i64 },

    // Call depth
    #[error("maximum recursion depth exceeded (limit: {depth})")]
    StackOverflow { depth: usize },

    // Names
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("variable '{name}' is not declared")]
    UndeclaredAssignment { name: String },
    #[error("class not found: {name}")]
    UndefinedClass { name: String },
    #[error("class {name} is declared more than once")]
    DuplicateClass { name: String },
    #[error("method '{method}' not found in class {class}")]
    UndefinedMethod { class: String, method: String },
    #[error("undefined function: {name}")]
    UndefinedFunction { name: String },
    #[error("no method named 'main' found in any class")]
    MissingMain,
    #[error("method 'main' is defined in more than one class: {classes}")]
    AmbiguousMain { classes: String },

    // Calls
    #[error("{name} expects {expected} {}, got {got}", arg_word(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("{name} expects {min} or {max} arguments, got {got}")]
    ArityRange {
        name: &'static str,
        min: usize,
        max: usize,
        got: usize,
    },
    #[error("{method} expects {expected} argument, got {got}")]
    WrongArgType {
        method: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    // Operators
    #[error("unsupported operand types for `{op}`: {left} and {right}")]
    UnsupportedOperands {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    #[error("unsupported operand type for unary `{op}`: {operand}")]
    UnsupportedUnary { op: UnaryOp, operand: &'static str },
    #[error("`{op}` requires an Integer variable, but '{name}' holds {got}")]
    IncDecNonInteger {
        op: IncDecOp,
        name: String,
        got: &'static str,
    },

    // Access
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },
    #[error("index must be an Integer, got {got}")]
    IndexNotInteger { got: &'static str },
    #[error("cannot index into {type_name}")]
    NotIndexable { type_name: &'static str },
    #[error("property '{property}' is not supported on {type_name}")]
    NoSuchProperty {
        property: String,
        type_name: &'static str,
    },
    #[error("no method '{method}' on type {type_name}")]
    NoSuchMethod {
        method: String,
        type_name: &'static str,
    },
    #[error("no field '{field}' on instance of {class}")]
    UndefinedField { field: String, class: String },
    #[error("cannot call '{method}' on an instance of {class}: instance methods are not supported")]
    ObjectMethodCall { method: String, class: String },
    #[error("'this' is not available: methods are not bound to instances")]
    ThisUnavailable,

    // Control flow
    #[error("{construct} condition must be a Boolean, got {got}")]
    NonBooleanCondition {
        construct: &'static str,
        got: &'static str,
    },
    #[error("for-each requires a List or String, got {type_name}")]
    NotIterable { type_name: &'static str },
    #[error("'{keyword}' outside of a loop")]
    OutsideLoop { keyword: &'static str },

    // Built-in methods
    #[error("element not found in list")]
    ElementNotFound,
    #[error("cannot pop from an empty list")]
    PopFromEmpty,
    #[error("cannot sort a list of mixed or unorderable elements")]
    IncomparableSort,
    #[error("substring range {start}..{end} is invalid for length {len}")]
    InvalidSubstring { start: i64, end: i64, len: usize },
}

#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "called from the derived Display with a field reference"
)]
fn arg_word(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DivisionByZero
            | Self::ModuloByZero
            | Self::NegativeExponent
            | Self::IntegerOverflow { .. }
            | Self::ShiftOutOfRange { .. } => ErrorCategory::Arithmetic,
            Self::StackOverflow { .. } => ErrorCategory::StackOverflow,
            _ => ErrorCategory::Runtime,
        }
    }
}

/// A runtime failure, with the source line and active call frames where
/// they are known.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Line of the innermost statement or expression that failed.
    pub line: Option<u32>,
    /// Active `Class.method` frames, innermost first.
    pub backtrace: Vec<String>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            line: None,
            backtrace: Vec::new(),
        }
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Record `line` unless a more precise line was already recorded.
    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line.get_or_insert(line);
        self
    }

    /// Attach a backtrace unless one was captured closer to the error site.
    #[must_use]
    pub fn with_backtrace(mut self, frames: Vec<String>) -> Self {
        if self.backtrace.is_empty() {
            self.backtrace = frames;
        }
        self
    }
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn negative_exponent() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NegativeExponent)
}

/// Integer overflow in the named operation.
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn shift_out_of_range(amount: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ShiftOutOfRange { amount })
}

/// Call depth reached the configured limit.
#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth: limit })
}

// Name Resolution Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// Plain `=` to a name that was never declared with `var`.
#[cold]
pub fn undeclared_assignment(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndeclaredAssignment {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_class(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedClass {
        name: name.to_string(),
    })
}

#[cold]
pub fn duplicate_class(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateClass {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_method(class: &str, method: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedMethod {
        class: class.to_string(),
        method: method.to_string(),
    })
}

/// Call with no enclosing class to resolve it against.
#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn missing_main() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingMain)
}

#[cold]
pub fn ambiguous_main(classes: &[&str]) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AmbiguousMain {
        classes: classes.join(", "),
    })
}

// Call Errors

/// Argument count does not match a function's or built-in's parameter count.
#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn wrong_arg_count_range(name: &'static str, min: usize, max: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityRange {
        name,
        min,
        max,
        got,
    })
}

/// Built-in received an argument of the wrong type; `expected` reads as a
/// noun phrase ("an Integer").
#[cold]
pub fn wrong_arg_type(method: &'static str, expected: &'static str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgType {
        method,
        expected,
        got: got.type_name(),
    })
}

// Operator Errors

#[cold]
pub fn unsupported_operands(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperands {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn unsupported_unary(op: UnaryOp, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedUnary {
        op,
        operand: operand.type_name(),
    })
}

#[cold]
pub fn inc_dec_non_integer(op: IncDecOp, name: &str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IncDecNonInteger {
        op,
        name: name.to_string(),
        got: got.type_name(),
    })
}

// Index and Access Errors

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

#[cold]
pub fn index_not_integer(got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexNotInteger {
        got: got.type_name(),
    })
}

#[cold]
pub fn not_indexable(target: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotIndexable {
        type_name: target.type_name(),
    })
}

#[cold]
pub fn no_such_property(property: &str, target: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoSuchProperty {
        property: property.to_string(),
        type_name: target.type_name(),
    })
}

#[cold]
pub fn no_such_method(method: &str, type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoSuchMethod {
        method: method.to_string(),
        type_name,
    })
}

#[cold]
pub fn undefined_field(field: &str, class: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedField {
        field: field.to_string(),
        class: class.to_string(),
    })
}

#[cold]
pub fn object_method_call(method: &str, class: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ObjectMethodCall {
        method: method.to_string(),
        class: class.to_string(),
    })
}

#[cold]
pub fn this_unavailable() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ThisUnavailable)
}

// Control Flow Errors

/// `construct` names the owner of the condition (`if`, `while`, ...).
#[cold]
pub fn non_boolean_condition(construct: &'static str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonBooleanCondition {
        construct,
        got: got.type_name(),
    })
}

#[cold]
pub fn not_iterable(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotIterable {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn outside_loop(keyword: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OutsideLoop { keyword })
}

// Built-in Method Errors

#[cold]
pub fn element_not_found() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ElementNotFound)
}

#[cold]
pub fn pop_from_empty() -> EvalError {
    EvalError::from_kind(EvalErrorKind::PopFromEmpty)
}

#[cold]
pub fn incomparable_sort() -> EvalError {
    EvalError::from_kind(EvalErrorKind::IncomparableSort)
}

#[cold]
pub fn invalid_substring(start: i64, end: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidSubstring { start, end, len })
}

#[cfg(test)]
mod tests;
