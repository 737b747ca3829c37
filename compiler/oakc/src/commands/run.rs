//! The `run` command: lex, parse and execute an Oak source file.

use std::process::ExitCode;

use oak_diagnostic::DiagnosticQueue;
use tracing::debug;

use super::{load, report};
use crate::problem::{lex_warning, pipeline_diagnostics};
use crate::{parse_source, run_program, RunOptions};

/// Run the program in `path`.
///
/// Lexer warnings are reported before execution starts so they never
/// interleave with program output.
pub fn run_file(path: &str, options: &RunOptions) -> ExitCode {
    let Some(source) = load(path, options.color) else {
        return ExitCode::FAILURE;
    };

    let mut queue = DiagnosticQueue::new();
    let program = match parse_source(&source) {
        Ok(program) => program,
        Err(err) => {
            queue.extend(
                pipeline_diagnostics(&err)
                    .into_iter()
                    .map(|diag| diag.with_path(path)),
            );
            report(&mut queue, options.color);
            return ExitCode::FAILURE;
        }
    };

    queue.extend(
        program
            .lex_errors
            .iter()
            .map(|err| lex_warning(err).with_path(path)),
    );
    report(&mut queue, options.color);

    let mut interpreter = options.interpreter();
    match run_program(&mut interpreter, program) {
        Ok(_) => {
            debug!(path, "program finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            queue.extend(
                pipeline_diagnostics(&err)
                    .into_iter()
                    .map(|diag| diag.with_path(path)),
            );
            report(&mut queue, options.color);
            ExitCode::FAILURE
        }
    }
}
