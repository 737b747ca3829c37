//! Lexer error type.
//!
//! The lexer never fails: each error here was reported and the offending
//! character skipped.

/// A character that starts no token.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("line {line}: unknown character '{found}'")]
pub struct LexError {
    pub found: char,
    pub line: u32,
}
