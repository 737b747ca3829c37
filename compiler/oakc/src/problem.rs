//! Conversion of phase failures into [`Diagnostic`]s.
//!
//! One function per phase. Eval errors pick their E6xxx code from
//! [`ErrorCategory`] and carry the call stack as a note.

use std::fmt::Write;
use std::io;

use oak_diagnostic::{Diagnostic, ErrorCode};
use oak_eval::{ErrorCategory, EvalError, EvalErrorKind};
use oak_lexer::LexError;
use oak_parse::ParseError;

use crate::PipelineError;

/// Frames listed in a call stack note before the rest are elided.
pub const MAX_BACKTRACE_FRAMES: usize = 10;

/// `E0001`: the source file could not be read.
#[cold]
pub fn file_read_error(path: &str, error: &io::Error) -> Diagnostic {
    let message = match error.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {error}"),
    };
    Diagnostic::error(ErrorCode::E0001)
        .with_message(message)
        .with_path(path)
}

/// `E0002`: a character the lexer skipped. Reported as a warning.
pub fn lex_warning(error: &LexError) -> Diagnostic {
    Diagnostic::warning(ErrorCode::E0002)
        .with_message(format!("unknown character '{}' skipped", error.found))
        .with_line(error.line)
}

/// `E1001`: the first syntax error.
#[cold]
pub fn parse_error(error: &ParseError) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(error.message.clone())
        .with_line(error.line)
        .with_note(format!("found {}", error.found))
}

/// `E6001`..`E6003`, chosen by the error's category.
#[cold]
pub fn eval_error(error: &EvalError) -> Diagnostic {
    let code = match error.category() {
        ErrorCategory::Runtime => ErrorCode::E6001,
        ErrorCategory::Arithmetic => ErrorCode::E6002,
        ErrorCategory::StackOverflow => ErrorCode::E6003,
    };
    let mut diag = Diagnostic::error(code).with_message(error.kind.to_string());
    if let Some(line) = error.line {
        diag = diag.with_line(line);
    }
    if !error.backtrace.is_empty() {
        diag = diag.with_note(call_stack_note(&error.backtrace));
    }
    match &error.kind {
        EvalErrorKind::StackOverflow { .. } => {
            diag.with_suggestion("raise the limit with --max-depth=N or OAK_MAX_DEPTH")
        }
        EvalErrorKind::MissingMain => {
            diag.with_suggestion("declare `def main() { ... }` in exactly one class")
        }
        _ => diag,
    }
}

/// The diagnostic for the fatal error alone.
pub fn pipeline_error(error: &PipelineError) -> Diagnostic {
    match error {
        PipelineError::Parse { error, .. } => parse_error(error),
        PipelineError::Eval(err) => eval_error(err),
    }
}

/// Everything a failed pipeline has to report, in source order: the lexer
/// warnings a parse failure carries come before the parse error itself.
pub fn pipeline_diagnostics(error: &PipelineError) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    if let PipelineError::Parse { lex_errors, .. } = error {
        diagnostics.extend(lex_errors.iter().map(lex_warning));
    }
    diagnostics.push(pipeline_error(error));
    diagnostics
}

/// `call stack:` followed by one numbered frame per line, innermost first.
fn call_stack_note(frames: &[String]) -> String {
    let mut note = String::from("call stack:");
    for (i, frame) in frames.iter().take(MAX_BACKTRACE_FRAMES).enumerate() {
        let _ = write!(note, "\n  {i}: {frame}");
    }
    if frames.len() > MAX_BACKTRACE_FRAMES {
        let _ = write!(
            note,
            "\n  ... {} more frames",
            frames.len() - MAX_BACKTRACE_FRAMES
        );
    }
    note
}
