//! Token re-serialization.

use std::fmt::Write;

use oak_ir::{Token, TokenKind};

/// Render tokens back into source text that lexes to the same sequence.
///
/// Tokens are separated by single spaces so adjacent operators stay apart
/// (`+` `+` must not fuse into `++`). String contents are re-quoted.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, tok) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if tok.kind == TokenKind::String {
            let _ = write!(out, "\"{}\"", tok.text);
        } else {
            out.push_str(&tok.text);
        }
    }
    out
}
