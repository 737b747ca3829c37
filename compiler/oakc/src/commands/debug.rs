//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::process::ExitCode;

use oak_diagnostic::{ColorMode, DiagnosticQueue};

use super::{load, report};
use crate::problem::{lex_warning, pipeline_diagnostics};
use crate::{lex_source, parse_source};

/// Print the token stream of `path`, one token per line.
pub fn lex_file(path: &str, color: ColorMode) -> ExitCode {
    let Some(source) = load(path, color) else {
        return ExitCode::FAILURE;
    };
    let output = lex_source(&source);

    for tok in &output.tokens {
        println!("{tok}");
    }

    let mut queue = DiagnosticQueue::new();
    queue.extend(output.errors.iter().map(|err| lex_warning(err).with_path(path)));
    report(&mut queue, color);
    ExitCode::SUCCESS
}

/// Print the AST of `path`.
pub fn parse_file(path: &str, color: ColorMode) -> ExitCode {
    let Some(source) = load(path, color) else {
        return ExitCode::FAILURE;
    };
    let mut queue = DiagnosticQueue::new();
    let code = match parse_source(&source) {
        Ok(program) => {
            println!("{:#?}", program.class);
            queue.extend(
                program
                    .lex_errors
                    .iter()
                    .map(|err| lex_warning(err).with_path(path)),
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            queue.extend(
                pipeline_diagnostics(&err)
                    .into_iter()
                    .map(|diag| diag.with_path(path)),
            );
            ExitCode::FAILURE
        }
    };
    report(&mut queue, color);
    code
}
