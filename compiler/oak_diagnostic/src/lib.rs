//! Diagnostic system for Oak error reporting.
//!
//! Every fatal or non-fatal problem the driver reports becomes a
//! [`Diagnostic`]:
//! - an [`ErrorCode`] identifying the phase and kind
//! - a message saying what went wrong
//! - the source line, when one is known
//! - notes and help text giving context
//!
//! Diagnostics are collected in a [`DiagnosticQueue`] and written by a
//! [`DiagnosticEmitter`] such as [`TerminalEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
