//! Parse error type.

/// A structural grammar violation. Parsing stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("line {line}: {message} (found {found})")]
pub struct ParseError {
    /// Line of the offending token, or of the last token at end of input.
    pub line: u32,
    /// What the parser expected, e.g. "expected ')'".
    pub message: String,
    /// The offending token text, quoted, or "end of input".
    pub found: String,
}

impl ParseError {
    pub fn new(line: u32, message: impl Into<String>, found: impl Into<String>) -> Self {
        ParseError {
            line,
            message: message.into(),
            found: found.into(),
        }
    }
}
