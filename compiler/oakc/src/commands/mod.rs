//! Command handlers for the `oak` CLI.
//!
//! Each handler returns the process exit code. Shared reporting helpers live
//! here in the module root.

mod args;
mod debug;
mod run;

pub use args::{parse_file_args, ArgsError, FileArgs, FileCommand};
pub use debug::{lex_file, parse_file};
pub use run::run_file;

use std::io::{IsTerminal, Stderr};

use oak_diagnostic::{ColorMode, DiagnosticEmitter, DiagnosticQueue, TerminalEmitter};

use crate::read_source;

fn stderr_emitter(color: ColorMode) -> TerminalEmitter<Stderr> {
    let is_tty = std::io::stderr().is_terminal();
    TerminalEmitter::stderr(color, is_tty)
}

/// Write out and clear every queued diagnostic, followed by the summary line.
pub(crate) fn report(queue: &mut DiagnosticQueue, color: ColorMode) {
    if queue.is_empty() {
        return;
    }
    let (errors, warnings) = (queue.error_count(), queue.warning_count());
    let mut emitter = stderr_emitter(color);
    emitter.emit_all(&queue.flush());
    emitter.emit_summary(errors, warnings);
    emitter.flush();
}

/// Read `path`, reporting a read failure immediately.
fn load(path: &str, color: ColorMode) -> Option<String> {
    let mut queue = DiagnosticQueue::new();
    let source = read_source(path, &mut queue);
    if queue.has_errors() {
        report(&mut queue, color);
    }
    source
}
