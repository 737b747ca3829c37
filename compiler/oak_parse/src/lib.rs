//! Recursive descent parser for Oak.
//!
//! Statements are parsed by plain recursive descent; expressions by a
//! precedence chain, one function per tier (see `grammar::expr`). The result
//! is a single [`ClassDecl`].

mod cursor;
mod error;
mod grammar;
mod stack;

pub use cursor::Cursor;
pub use error::ParseError;
pub use grammar::MAX_NESTING_DEPTH;

use oak_ir::{ClassDecl, Token};
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Open statements, expressions and suffix/operator folds.
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            depth: 0,
        }
    }

    /// Parse `class Name { members }` and require that nothing follows it.
    pub fn parse_program(mut self) -> Result<ClassDecl, ParseError> {
        let class = self.parse_class()?;
        if !self.cursor.is_at_end() {
            return Err(self.cursor.error("unexpected token after class body"));
        }
        debug!(
            class = %class.name,
            members = class.members.len(),
            "parsed class"
        );
        Ok(class)
    }
}

/// Parse a token stream into its class declaration.
pub fn parse(tokens: &[Token]) -> Result<ClassDecl, ParseError> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests;
