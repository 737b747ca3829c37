//! Lex → parse → interpret.

use oak_diagnostic::ColorMode;
use oak_eval::{
    stdout_handler, EvalError, Interpreter, InterpreterBuilder, SharedPrintHandler,
    DEFAULT_MAX_CALL_DEPTH,
};
use oak_ir::ClassDecl;
use oak_lexer::{tokenize, LexError, LexOutput};
use oak_parse::{parse, ParseError};
use tracing::{debug, warn};

/// Environment variable supplying the call depth limit when no flag does.
pub const MAX_DEPTH_ENV: &str = "OAK_MAX_DEPTH";

/// Settings for one run of the pipeline.
#[derive(Clone)]
pub struct RunOptions {
    pub max_call_depth: usize,
    pub color: ColorMode,
    /// Where `print` output goes.
    pub print_handler: SharedPrintHandler,
}

impl RunOptions {
    /// Defaults, with the depth limit taken from `OAK_MAX_DEPTH` when it holds
    /// a positive integer.
    pub fn from_env() -> Self {
        let mut options = RunOptions::default();
        if let Ok(raw) = std::env::var(MAX_DEPTH_ENV) {
            match parse_max_depth(&raw) {
                Some(depth) => options.max_call_depth = depth,
                None => warn!(value = %raw, "ignoring invalid {MAX_DEPTH_ENV}"),
            }
        }
        options
    }

    #[must_use]
    pub fn with_print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = handler;
        self
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// A fresh interpreter configured by these options.
    pub fn interpreter(&self) -> Interpreter {
        InterpreterBuilder::new()
            .print_handler(self.print_handler.clone())
            .max_call_depth(self.max_call_depth)
            .build()
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            color: ColorMode::Auto,
            print_handler: stdout_handler(),
        }
    }
}

/// Parse a depth limit: a positive decimal integer.
pub fn parse_max_depth(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|&depth| depth > 0)
}

/// What a successful run leaves behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Characters the lexer skipped.
    pub lex_errors: Vec<LexError>,
}

/// A parsed program plus the lexer's non-fatal findings.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedProgram {
    pub class: ClassDecl,
    pub lex_errors: Vec<LexError>,
}

/// A fatal pipeline failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// The first syntax error, plus whatever the lexer skipped on the way.
    #[error("parse error: {error}")]
    Parse {
        #[source]
        error: ParseError,
        lex_errors: Vec<LexError>,
    },
    #[error("runtime error: {0}")]
    Eval(#[from] EvalError),
}

pub fn lex_source(source: &str) -> LexOutput {
    tokenize(source)
}

/// Lex and parse `source`. Lexer findings travel with the result either way.
pub fn parse_source(source: &str) -> Result<ParsedProgram, PipelineError> {
    let LexOutput { tokens, errors } = lex_source(source);
    debug!(tokens = tokens.len(), lex_errors = errors.len(), "lexed");
    match parse(&tokens) {
        Ok(class) => Ok(ParsedProgram {
            class,
            lex_errors: errors,
        }),
        Err(error) => Err(PipelineError::Parse {
            error,
            lex_errors: errors,
        }),
    }
}

/// Run an already parsed program on `interpreter`.
pub fn run_program(
    interpreter: &mut Interpreter,
    program: ParsedProgram,
) -> Result<RunOutcome, PipelineError> {
    interpreter.execute_program([program.class])?;
    Ok(RunOutcome {
        lex_errors: program.lex_errors,
    })
}

/// Lex, parse and execute `source` with a fresh interpreter.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn run_source(source: &str, options: &RunOptions) -> Result<RunOutcome, PipelineError> {
    let program = parse_source(source)?;
    let mut interpreter = options.interpreter();
    run_program(&mut interpreter, program)
}

#[cfg(test)]
mod tests;
