//! Tree-walking interpreter.
//!
//! # Architecture
//!
//! - The class registry is filled once per [`Interpreter::execute_program`]
//!   call and read-only afterwards.
//! - Every method invocation pushes a [`CallFrame`] with a fresh scope and
//!   pops it on every exit path, so a failed run leaves the stack empty.
//! - Statements return an [`ExecOutcome`]; `break`, `continue` and `return`
//!   travel up as values, not as errors.
//! - Both statement and expression recursion run under
//!   `ensure_sufficient_stack`, so the configured call depth is what stops a
//!   runaway recursion rather than the host stack.

mod builder;
mod expressions;
mod statements;

pub use builder::InterpreterBuilder;
pub use statements::ExecOutcome;

use std::rc::Rc;

use oak_ir::ClassDecl;
use oak_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::call_stack::{CallFrame, CallStack};
use crate::errors::{
    ambiguous_main, duplicate_class, missing_main, outside_loop, undefined_class,
    undefined_method, wrong_arg_count, EvalError, EvalResult,
};
use crate::print_handler::SharedPrintHandler;
use crate::Value;

/// Executes parsed Oak programs.
pub struct Interpreter {
    pub(crate) classes: FxHashMap<String, Rc<ClassDecl>>,
    pub(crate) call_stack: CallStack,
    pub(crate) print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter printing to stdout with the default depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Number of calls currently active. Zero between runs.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Register every class of `program`, then run the single `main` method.
    ///
    /// Any previous registry is discarded, so one interpreter can run
    /// several programs in turn.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn execute_program(
        &mut self,
        program: impl IntoIterator<Item = ClassDecl>,
    ) -> Result<(), EvalError> {
        self.classes.clear();
        self.call_stack.clear();

        for class in program {
            self.register_class(class)?;
        }

        let main_class = self.find_main()?;
        debug!(class = %main_class.name, "located main");
        self.invoke(&main_class, "main", Vec::new())?;
        Ok(())
    }

    fn register_class(&mut self, class: ClassDecl) -> Result<(), EvalError> {
        if self.classes.contains_key(&class.name) {
            return Err(duplicate_class(&class.name).at_line(class.line));
        }
        debug!(
            class = %class.name,
            methods = class.functions().count(),
            "registered class"
        );
        self.classes.insert(class.name.clone(), Rc::new(class));
        Ok(())
    }

    /// The one registered class that declares `main`.
    fn find_main(&self) -> Result<Rc<ClassDecl>, EvalError> {
        let mut candidates: Vec<&Rc<ClassDecl>> = self
            .classes
            .values()
            .filter(|class| class.function("main").is_some())
            .collect();
        match candidates.len() {
            0 => Err(missing_main()),
            1 => Ok(Rc::clone(candidates[0])),
            _ => {
                candidates.sort_by(|a, b| a.name.cmp(&b.name));
                let names: Vec<&str> = candidates.iter().map(|class| class.name.as_str()).collect();
                Err(ambiguous_main(&names))
            }
        }
    }

    /// Call `class_name.method(args)` on a registered class.
    pub fn call_method(
        &mut self,
        class_name: &str,
        method: &str,
        args: Vec<Value>,
    ) -> EvalResult {
        let class = self
            .classes
            .get(class_name)
            .cloned()
            .ok_or_else(|| undefined_class(class_name))?;
        self.invoke(&class, method, args)
    }

    /// Run one method body in a fresh frame.
    ///
    /// The frame is popped whether the body returns, falls off the end or
    /// fails; errors leaving the call carry the active frames as backtrace.
    #[tracing::instrument(level = "debug", skip(self, class, args), fields(class = %class.name))]
    fn invoke(&mut self, class: &Rc<ClassDecl>, method: &str, args: Vec<Value>) -> EvalResult {
        let func = class
            .function(method)
            .ok_or_else(|| undefined_method(&class.name, method))?;
        if func.params.len() != args.len() {
            return Err(wrong_arg_count(&func.name, func.params.len(), args.len()));
        }

        let mut frame = CallFrame::new(Rc::clone(class), method);
        frame.locals.extend(func.params.iter().cloned().zip(args));
        self.call_stack
            .push(frame)
            .map_err(|err| self.call_stack.attach_backtrace(err))?;

        let result = match ensure_sufficient_stack(|| self.exec_block(&func.body)) {
            Ok(ExecOutcome::Normal) => Ok(Value::Null),
            Ok(ExecOutcome::Return(value)) => Ok(value),
            Ok(ExecOutcome::Break) => Err(outside_loop("break")),
            Ok(ExecOutcome::Continue) => Err(outside_loop("continue")),
            Err(err) => Err(err),
        };
        let result = result.map_err(|err| self.call_stack.attach_backtrace(err));
        self.call_stack.pop();
        result
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
