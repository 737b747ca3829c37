//! Error codes for Oak diagnostics.
//!
//! The first digit of a code names the phase that produced it.

use std::fmt;

/// Error codes for all driver diagnostics.
///
/// Format: E#### where the first digit indicates phase:
/// - E0xxx: Source reading and lexing
/// - E1xxx: Parsing
/// - E6xxx: Evaluation
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Source / lexer (E0xxx)
    /// Source file could not be read
    E0001,
    /// Unknown character skipped by the lexer
    E0002,

    // Parser (E1xxx)
    /// Syntax error
    E1001,

    // Evaluation (E6xxx)
    /// Runtime error
    E6001,
    /// Arithmetic error
    E6002,
    /// Call depth limit exceeded
    E6003,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
    ];

    /// The code as written in output, e.g. `"E1001"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
        }
    }

    /// One-line description used by `oak help`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "source file could not be read",
            ErrorCode::E0002 => "unknown character in source",
            ErrorCode::E1001 => "syntax error",
            ErrorCode::E6001 => "runtime error",
            ErrorCode::E6002 => "arithmetic error",
            ErrorCode::E6003 => "call depth limit exceeded",
        }
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_eval_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
