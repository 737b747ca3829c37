//! Token cursor for navigating the token stream.
//!
//! Provides lookahead, kind/text checks, and consumption. The stream has no
//! EOF token: running off the end is represented by `current()` returning
//! `None`.

use oak_ir::{Token, TokenKind};
use tracing::trace;

use crate::ParseError;

pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// The token `offset` positions past the current one.
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + offset)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Consume the current token. Callers check before advancing, so at end
    /// of input this is a no-op returning `None`.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.pos)?;
        trace!(pos = self.pos, %tok, "consume");
        self.pos += 1;
        Some(tok)
    }

    #[inline]
    pub fn check(&self, kind: TokenKind, text: &str) -> bool {
        self.current().is_some_and(|tok| tok.is(kind, text))
    }

    #[inline]
    pub fn check_kind(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|tok| tok.kind == kind)
    }

    #[inline]
    pub fn check_delimiter(&self, text: &str) -> bool {
        self.check(TokenKind::Delimiter, text)
    }

    #[inline]
    pub fn check_keyword(&self, text: &str) -> bool {
        self.check(TokenKind::Keyword, text)
    }

    /// Consume the current token if it has this kind and text.
    pub fn eat(&mut self, kind: TokenKind, text: &str) -> bool {
        if self.check(kind, text) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn eat_delimiter(&mut self, text: &str) -> bool {
        self.eat(TokenKind::Delimiter, text)
    }

    pub fn eat_keyword(&mut self, text: &str) -> bool {
        self.eat(TokenKind::Keyword, text)
    }

    /// Consume the current operator if it is one of `ops`, returning its text.
    pub fn eat_operator(&mut self, ops: &[&str]) -> Option<&'a str> {
        let tok = self.current()?;
        if tok.kind == TokenKind::Operator && ops.contains(&tok.text.as_str()) {
            self.advance();
            Some(tok.text.as_str())
        } else {
            None
        }
    }

    /// Expect a token with this kind and text, advance and return it.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind, text: &str) -> Result<&'a Token, ParseError> {
        match self.current() {
            Some(tok) if tok.is(kind, text) => {
                self.pos += 1;
                Ok(tok)
            }
            _ => Err(self.error(format!("expected '{text}'"))),
        }
    }

    pub fn expect_delimiter(&mut self, text: &str) -> Result<&'a Token, ParseError> {
        self.expect(TokenKind::Delimiter, text)
    }

    /// Expect an identifier and return its text.
    pub fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match self.current() {
            Some(tok) if tok.kind == TokenKind::Identifier => {
                self.pos += 1;
                Ok(tok.text.clone())
            }
            _ => Err(self.error("expected identifier")),
        }
    }

    /// Line of the current token, falling back to the last token.
    pub fn line(&self) -> u32 {
        self.current()
            .or_else(|| self.tokens.last())
            .map_or(1, |tok| tok.line)
    }

    /// Build an error located at the current token.
    #[cold]
    #[inline(never)]
    pub fn error(&self, message: impl Into<String>) -> ParseError {
        let found = match self.current() {
            Some(tok) if tok.kind == TokenKind::String => format!("\"{}\"", tok.text),
            Some(tok) => format!("'{}'", tok.text),
            None => "end of input".to_string(),
        };
        ParseError::new(self.line(), message, found)
    }
}

#[cfg(test)]
mod tests;
