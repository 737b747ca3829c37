//! Primary expressions and the suffix chain.

use oak_ir::{Expr, ExprKind, NumberLiteral, TokenKind};
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a primary expression, then any `[index]`, `.name` and
    /// `.name(args)` suffixes, left to right.
    pub(super) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        self.restoring_depth(Self::parse_suffix_chain)
    }

    fn parse_suffix_chain(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary_atom()?;

        loop {
            let line = self.cursor.line();
            if self.cursor.eat_delimiter("[") {
                self.enter_nested()?;
                let index = self.parse_expr()?;
                self.cursor.expect_delimiter("]")?;
                expr = Expr::new(
                    ExprKind::Index {
                        target: Box::new(expr),
                        index: Box::new(index),
                    },
                    line,
                );
            } else if self.cursor.eat_delimiter(".") {
                self.enter_nested()?;
                let name = self.cursor.expect_identifier()?;
                let kind = if self.cursor.check_delimiter("(") {
                    ExprKind::MethodCall {
                        target: Box::new(expr),
                        method: name,
                        args: self.parse_args()?,
                    }
                } else {
                    ExprKind::Property {
                        target: Box::new(expr),
                        name,
                    }
                };
                expr = Expr::new(kind, line);
            } else {
                return Ok(expr);
            }
        }
    }

    fn parse_primary_atom(&mut self) -> Result<Expr, ParseError> {
        let line = self.cursor.line();
        let Some(tok) = self.cursor.current() else {
            return Err(self.cursor.error("expected an expression"));
        };
        trace!(line, %tok, "primary");

        let kind = match tok.kind {
            TokenKind::Number => return self.parse_number(),
            TokenKind::String => {
                self.cursor.advance();
                ExprKind::Str(tok.text.clone())
            }
            TokenKind::Identifier => {
                self.cursor.advance();
                let name = tok.text.clone();
                if self.cursor.check_delimiter("(") {
                    ExprKind::Call {
                        name,
                        args: self.parse_args()?,
                    }
                } else {
                    ExprKind::Variable(name)
                }
            }
            TokenKind::Keyword => match tok.text.as_str() {
                "true" | "false" => {
                    self.cursor.advance();
                    ExprKind::Bool(tok.text == "true")
                }
                "null" => {
                    self.cursor.advance();
                    ExprKind::Null
                }
                "this" => {
                    self.cursor.advance();
                    ExprKind::This
                }
                "list" => {
                    self.cursor.advance();
                    ExprKind::List(self.parse_args()?)
                }
                "new" => {
                    self.cursor.advance();
                    let class = self.cursor.expect_identifier()?;
                    self.cursor.expect_delimiter("(")?;
                    self.cursor.expect_delimiter(")")?;
                    ExprKind::New {
                        class,
                        args: Vec::new(),
                    }
                }
                _ => return Err(self.cursor.error("expected an expression")),
            },
            TokenKind::Delimiter if tok.text == "(" => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect_delimiter(")")?;
                return Ok(inner);
            }
            TokenKind::Delimiter if tok.text == "[" => {
                self.cursor.advance();
                ExprKind::List(self.parse_comma_list("]")?)
            }
            TokenKind::Delimiter | TokenKind::Operator => {
                return Err(self.cursor.error("expected an expression"));
            }
        };
        Ok(Expr::new(kind, line))
    }

    /// A digit run, folded with `. digits` into a double when present.
    fn parse_number(&mut self) -> Result<Expr, ParseError> {
        let line = self.cursor.line();
        let Some(whole) = self.cursor.advance() else {
            return Err(self.cursor.error("expected a number"));
        };

        let fraction = match (self.cursor.current(), self.cursor.peek(1)) {
            (Some(dot), Some(digits)) if dot.is_delimiter(".") && digits.kind == TokenKind::Number => {
                self.cursor.advance();
                self.cursor.advance();
                Some(digits.text.as_str())
            }
            _ => None,
        };

        let literal = match fraction {
            Some(fraction) => {
                let text = format!("{}.{fraction}", whole.text);
                match text.parse::<f64>() {
                    Ok(value) => NumberLiteral::Double(value),
                    Err(_) => return Err(ParseError::new(line, "invalid number", format!("'{text}'"))),
                }
            }
            None => match whole.text.parse::<i64>() {
                Ok(value) => NumberLiteral::Int(value),
                Err(_) => {
                    return Err(ParseError::new(
                        line,
                        "integer literal out of range",
                        format!("'{}'", whole.text),
                    ))
                }
            },
        };
        Ok(Expr::new(ExprKind::Number(literal), line))
    }

    /// `( expr, ... )`
    fn parse_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.cursor.expect_delimiter("(")?;
        self.parse_comma_list(")")
    }

    /// Comma-separated expressions up to and including `close`.
    fn parse_comma_list(&mut self, close: &str) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        if !self.cursor.check_delimiter(close) {
            loop {
                items.push(self.parse_expr()?);
                if !self.cursor.eat_delimiter(",") {
                    break;
                }
            }
        }
        self.cursor.expect_delimiter(close)?;
        Ok(items)
    }
}
