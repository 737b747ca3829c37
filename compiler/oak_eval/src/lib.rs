//! Oak Eval - tree-walking interpreter for Oak programs.
//!
//! # Architecture
//!
//! - [`Value`]: the closed set of runtime types; lists are shared by reference
//! - [`evaluate_binary`] / [`evaluate_unary`]: operator dispatch on runtime tags
//! - [`dispatch_builtin_method`]: list and string built-ins
//! - [`CallStack`]: one scope per active call, plus the depth limit
//! - [`Interpreter`]: class registry, statement execution, method invocation
//!
//! Failures are [`EvalError`]s built by the factories in [`errors`].

mod call_stack;
pub mod errors;
mod interpreter;
mod methods;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use call_stack::{CallFrame, CallStack, DEFAULT_MAX_CALL_DEPTH};
pub use errors::{ErrorCategory, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{ExecOutcome, Interpreter, InterpreterBuilder};
pub use methods::dispatch_builtin_method;
pub use operators::{evaluate_binary, evaluate_compound};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{ListValue, ObjectInstance, Value};
