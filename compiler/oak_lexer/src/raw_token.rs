//! Raw Token Definition
//!
//! The logos-derived token enum. Identifier runs, operators and delimiters
//! each collapse into a single variant; [`crate::tokenize`] attaches the
//! text and line to build the final [`oak_ir::Token`]. Newlines and
//! comments are trivia: they surface here only so the caller can count
//! lines, and never reach the token stream.

use logos::{Lexer, Logos};

/// Per-lexer state carried through logos callbacks.
pub(crate) struct LineTracker {
    pub line: u32,
}

impl Default for LineTracker {
    fn default() -> Self {
        LineTracker { line: 1 }
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LineTracker)]
#[logos(skip r"[ \t\r\x0C]+")]
pub(crate) enum RawToken {
    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*")]
    LineComment,

    /// Identifier or reserved word.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    /// Digit run; decimal points are delimiters and left to the parser.
    #[regex(r"[0-9]+")]
    Number,

    /// String literal. The payload is `false` when input ended before the
    /// closing quote.
    #[token("\"", string_body)]
    Str(bool),

    #[token("(")]
    #[token(")")]
    #[token("{")]
    #[token("}")]
    #[token("[")]
    #[token("]")]
    #[token(",")]
    #[token(":")]
    #[token(";")]
    #[token(".")]
    #[token("?")]
    Delimiter,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("**")]
    #[token("=")]
    #[token("==")]
    #[token("!=")]
    #[token("<")]
    #[token("<=")]
    #[token(">")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    #[token("!")]
    #[token("~")]
    #[token("<<")]
    #[token(">>")]
    #[token(">>>")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("<<=")]
    #[token(">>=")]
    #[token(">>>=")]
    #[token("++")]
    #[token("--")]
    Operator,
}

/// Consume through the closing quote, or to end of input if there is none.
/// Newlines inside the literal are counted by the caller once the token's
/// starting line has been recorded.
fn string_body(lex: &mut Lexer<RawToken>) -> bool {
    let rest = lex.remainder();
    match rest.find('"') {
        Some(close) => {
            lex.bump(close + 1);
            true
        }
        None => {
            lex.bump(rest.len());
            false
        }
    }
}
