//! Lexer for Oak using logos.
//!
//! [`tokenize`] turns source text into a flat [`Token`] sequence. Lexing never
//! fails: a character that starts no token is recorded as a [`LexError`],
//! skipped, and lexing continues.

mod keywords;
mod lex_error;
mod raw_token;
mod render;

use logos::Logos;
use oak_ir::{Token, TokenKind};
use tracing::{debug, warn};

pub use keywords::{is_keyword, KEYWORDS};
pub use lex_error::LexError;
pub use render::render_tokens;

use raw_token::RawToken;

/// Result of lexing one source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

/// Lex `source` into tokens, collecting unknown characters as errors.
pub fn tokenize(source: &str) -> LexOutput {
    let mut output = LexOutput::default();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let slice = logos.slice();
        let line = logos.extras.line;

        let raw = match result {
            Ok(raw) => raw,
            Err(()) => {
                for found in slice.chars() {
                    warn!(line, %found, "unknown character skipped");
                    output.errors.push(LexError { found, line });
                }
                continue;
            }
        };

        let (kind, text) = match raw {
            RawToken::Newline => {
                logos.extras.line += 1;
                continue;
            }
            RawToken::LineComment => continue,
            RawToken::Word if is_keyword(slice) => (TokenKind::Keyword, slice),
            RawToken::Word => (TokenKind::Identifier, slice),
            RawToken::Number => (TokenKind::Number, slice),
            RawToken::Delimiter => (TokenKind::Delimiter, slice),
            RawToken::Operator => (TokenKind::Operator, slice),
            RawToken::Str(terminated) => {
                let body = &slice[1..];
                let body = if terminated {
                    &body[..body.len() - 1]
                } else {
                    body
                };
                logos.extras.line += newline_count(body);
                (TokenKind::String, body)
            }
        };
        output.tokens.push(Token::new(kind, text, line));
    }

    debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed source"
    );
    output
}

fn newline_count(text: &str) -> u32 {
    let count = text.bytes().filter(|&b| b == b'\n').count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
