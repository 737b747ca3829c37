//! Per-call scopes and depth tracking.
//!
//! Each method invocation pushes a [`CallFrame`] holding its own flat
//! variable map, so recursive calls never see or clobber their caller's
//! locals. The depth check lives in [`CallStack::push`]; the frames double
//! as the backtrace attached to errors that escape a call.

use std::rc::Rc;

use oak_ir::ClassDecl;
use rustc_hash::FxHashMap;

use crate::errors::{recursion_limit_exceeded, EvalError};
use crate::Value;

/// Call depth limit used when none is configured.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// One active method invocation.
#[derive(Debug)]
pub struct CallFrame {
    /// Class whose method is executing; bare calls resolve against it.
    pub class: Rc<ClassDecl>,
    pub method: String,
    pub locals: FxHashMap<String, Value>,
}

impl CallFrame {
    pub fn new(class: Rc<ClassDecl>, method: impl Into<String>) -> Self {
        CallFrame {
            class,
            method: method.into(),
            locals: FxHashMap::default(),
        }
    }

    /// `Class.method`, as shown in backtraces.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.class.name, self.method)
    }
}

/// Live call stack for the interpreter.
#[derive(Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` of `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, failing with a stack overflow if the limit is reached.
    ///
    /// The frame is not pushed on overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Pop the most recent frame.
    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[inline]
    pub fn current_frame(&self) -> Option<&CallFrame> {
        self.frames.last()
    }

    /// Drop every frame, e.g. after an aborted run.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    // Scope access. All of these act on the innermost frame.

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.frames.last()?.locals.get(name)
    }

    /// Bind `name` in the current scope, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.locals.insert(name.into(), value);
        }
    }

    /// Overwrite an existing binding. Returns `false` if `name` is unbound.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        match self
            .frames
            .last_mut()
            .and_then(|frame| frame.locals.get_mut(name))
        {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Snapshot of the active frames, most recent first.
    pub fn capture(&self) -> Vec<String> {
        self.frames
            .iter()
            .rev()
            .map(CallFrame::qualified_name)
            .collect()
    }

    /// Attach the current frames to `err` as its backtrace.
    ///
    /// An error that already carries one is returned unchanged, so unwinding
    /// through many frames captures only once.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() || !err.backtrace.is_empty() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_CALL_DEPTH))
    }
}
