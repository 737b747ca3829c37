//! Arguments of the file commands: `<file.oak>` plus flags.
//!
//! `--color` is shared; `--max-depth` only means something to `run`, so the
//! debug commands reject it instead of ignoring it.

use oak_diagnostic::ColorMode;

use crate::{parse_max_depth, RunOptions};

/// A command that takes a source file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FileCommand {
    Run,
    Lex,
    Parse,
}

impl FileCommand {
    pub fn name(self) -> &'static str {
        match self {
            FileCommand::Run => "run",
            FileCommand::Lex => "lex",
            FileCommand::Parse => "parse",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            FileCommand::Run => {
                "Usage: oak run <file.oak> [--max-depth=N] [--color=auto|always|never]"
            }
            FileCommand::Lex => "Usage: oak lex <file.oak> [--color=auto|always|never]",
            FileCommand::Parse => "Usage: oak parse <file.oak> [--color=auto|always|never]",
        }
    }

    fn accepts_max_depth(self) -> bool {
        self == FileCommand::Run
    }
}

/// A rejected command line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("--max-depth expects a positive integer, got '{0}'")]
    InvalidMaxDepth(String),
    #[error("--color expects auto, always or never, got '{0}'")]
    InvalidColor(String),
    #[error("'{command}' does not accept {flag}")]
    UnsupportedOption { command: &'static str, flag: String },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("missing file path")]
    MissingPath,
}

/// A parsed command line: the source path and the options its flags select.
pub struct FileArgs {
    pub path: String,
    pub options: RunOptions,
}

/// Apply `args` (everything after the command name) on top of `options`.
pub fn parse_file_args(
    command: FileCommand,
    args: &[String],
    mut options: RunOptions,
) -> Result<FileArgs, ArgsError> {
    let mut path = None;

    for arg in args {
        if let Some(depth) = arg.strip_prefix("--max-depth=") {
            if !command.accepts_max_depth() {
                return Err(ArgsError::UnsupportedOption {
                    command: command.name(),
                    flag: "--max-depth".to_string(),
                });
            }
            options.max_call_depth =
                parse_max_depth(depth).ok_or_else(|| ArgsError::InvalidMaxDepth(depth.into()))?;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            options.color =
                ColorMode::parse(mode).ok_or_else(|| ArgsError::InvalidColor(mode.into()))?;
        } else if arg.starts_with('-') {
            return Err(ArgsError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(ArgsError::UnexpectedArgument(arg.clone()));
        }
    }

    let path = path.ok_or(ArgsError::MissingPath)?;
    Ok(FileArgs { path, options })
}
