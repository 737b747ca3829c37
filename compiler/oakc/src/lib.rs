//! Oak driver library.
//!
//! Ties the phases together: [`lex_source`] → [`parse_source`] →
//! [`run_source`]. Failures are turned into [`oak_diagnostic::Diagnostic`]s
//! by the [`problem`] module; the `oak` binary is a thin layer over
//! [`commands`].

pub mod commands;
mod pipeline;
pub mod problem;
mod source;
mod tracing_setup;

pub use pipeline::{
    lex_source, parse_max_depth, parse_source, run_program, run_source, ParsedProgram,
    PipelineError, RunOptions, RunOutcome, MAX_DEPTH_ENV,
};
pub use source::read_source;
pub use tracing_setup::{init_tracing, LOG_TREE_ENV};
