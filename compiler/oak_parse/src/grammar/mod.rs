//! Grammar productions.
//!
//! - `mod.rs`: class, member and statement productions
//! - `expr/`: the expression precedence chain, primaries and suffixes

mod expr;

use oak_ir::{ClassDecl, ElseIf, Expr, FunctionDecl, Stmt, StmtKind, TokenKind};
use tracing::trace;

use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, Parser};

/// Deepest nesting of statements and expressions the parser accepts.
///
/// Bounds the depth of every tree it returns, so walking, cloning and
/// dropping a parsed class cannot exhaust the stack.
pub const MAX_NESTING_DEPTH: usize = 512;

impl Parser<'_> {
    /// Run `parse` one nesting level deeper, on a grown stack if needed.
    pub(crate) fn descend<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.restoring_depth(|parser| {
            parser.enter_nested()?;
            ensure_sufficient_stack(|| parse(parser))
        })
    }

    /// Run `parse` and reset the nesting depth afterwards, whatever
    /// `enter_nested` calls it made.
    pub(crate) fn restoring_depth<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let depth = self.depth;
        let result = parse(self);
        self.depth = depth;
        result
    }

    /// Count one more level of nesting.
    pub(crate) fn enter_nested(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self
                .cursor
                .error(format!("nesting exceeds {MAX_NESTING_DEPTH} levels")));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn parse_class(&mut self) -> Result<ClassDecl, ParseError> {
        let line = self.cursor.line();
        self.cursor.expect(TokenKind::Keyword, "class")?;
        let name = self.cursor.expect_identifier()?;
        let members = self.parse_block()?;
        Ok(ClassDecl {
            name,
            members,
            line,
        })
    }

    /// `{ statement* }`
    fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.cursor.expect_delimiter("{")?;
        let mut body = Vec::new();
        while !self.cursor.check_delimiter("}") {
            if self.cursor.is_at_end() {
                return Err(self.cursor.error("expected '}'"));
            }
            body.push(self.parse_statement()?);
        }
        self.cursor.expect_delimiter("}")?;
        Ok(body)
    }

    /// Parse one statement.
    ///
    /// Counted against `MAX_NESTING_DEPTH`: blocks nest statements.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        self.descend(Self::parse_statement_inner)
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt, ParseError> {
        let line = self.cursor.line();
        let keyword = self
            .cursor
            .current()
            .filter(|tok| tok.kind == TokenKind::Keyword)
            .map(|tok| tok.text.as_str());

        let kind = match keyword {
            Some("def") => StmtKind::Function(self.parse_function()?),
            Some("var") => {
                self.cursor.advance();
                let kind = self.parse_var_tail()?;
                self.cursor.expect_delimiter(";")?;
                kind
            }
            Some("print") => {
                self.cursor.advance();
                self.cursor.expect_delimiter("(")?;
                let value = self.parse_expr()?;
                self.cursor.expect_delimiter(")")?;
                self.cursor.expect_delimiter(";")?;
                StmtKind::Print(value)
            }
            Some("return") => {
                self.cursor.advance();
                let value = if self.cursor.check_delimiter(";") {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.cursor.expect_delimiter(";")?;
                StmtKind::Return(value)
            }
            Some("if") => self.parse_if()?,
            Some("while") => {
                self.cursor.advance();
                let cond = self.parse_paren_condition()?;
                let body = self.parse_block()?;
                StmtKind::While { cond, body }
            }
            Some("for") => self.parse_for()?,
            Some("break") => {
                self.cursor.advance();
                self.cursor.expect_delimiter(";")?;
                StmtKind::Break
            }
            Some("continue") => {
                self.cursor.advance();
                self.cursor.expect_delimiter(";")?;
                StmtKind::Continue
            }
            _ => {
                let expr = self.parse_expr()?;
                self.cursor.expect_delimiter(";")?;
                StmtKind::Expr(expr)
            }
        };
        trace!(line, "statement");
        Ok(Stmt::new(kind, line))
    }

    /// `def name(a, b) { body }`
    fn parse_function(&mut self) -> Result<FunctionDecl, ParseError> {
        let line = self.cursor.line();
        self.cursor.expect(TokenKind::Keyword, "def")?;
        let name = self.cursor.expect_identifier()?;
        self.cursor.expect_delimiter("(")?;
        let mut params = Vec::new();
        if !self.cursor.check_delimiter(")") {
            loop {
                params.push(self.cursor.expect_identifier()?);
                if !self.cursor.eat_delimiter(",") {
                    break;
                }
            }
        }
        self.cursor.expect_delimiter(")")?;
        let body = self.parse_block()?;
        Ok(FunctionDecl {
            name,
            params,
            body,
            line,
        })
    }

    /// `name = expr`, after `var` has been consumed.
    fn parse_var_tail(&mut self) -> Result<StmtKind, ParseError> {
        let name = self.cursor.expect_identifier()?;
        self.cursor.expect(TokenKind::Operator, "=")?;
        let init = self.parse_expr()?;
        Ok(StmtKind::Var { name, init })
    }

    /// `( expr )`
    fn parse_paren_condition(&mut self) -> Result<Expr, ParseError> {
        self.cursor.expect_delimiter("(")?;
        let cond = self.parse_expr()?;
        self.cursor.expect_delimiter(")")?;
        Ok(cond)
    }

    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(TokenKind::Keyword, "if")?;
        let cond = self.parse_paren_condition()?;
        let then_body = self.parse_block()?;

        let mut else_ifs = Vec::new();
        let mut else_body = None;
        while self.cursor.eat_keyword("else") {
            if self.cursor.eat_keyword("if") {
                let cond = self.parse_paren_condition()?;
                let body = self.parse_block()?;
                else_ifs.push(ElseIf { cond, body });
            } else {
                else_body = Some(self.parse_block()?);
                break;
            }
        }

        Ok(StmtKind::If {
            cond,
            then_body,
            else_ifs,
            else_body,
        })
    }

    /// Both loop forms share the `for (` prefix:
    ///
    /// - `for (var x : iterable) { .. }`
    /// - `for (init?; cond?; step?) { .. }` where `init` is `var x = e`, an
    ///   expression, or empty.
    fn parse_for(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(TokenKind::Keyword, "for")?;
        self.cursor.expect_delimiter("(")?;

        let init_line = self.cursor.line();
        let init = if self.cursor.eat_keyword("var") {
            if !self.cursor.check_kind(TokenKind::Identifier) {
                return Err(self.cursor.error("expected identifier"));
            }
            match self.cursor.peek(1) {
                Some(tok) if tok.is_delimiter(":") => {
                    let var = self.cursor.expect_identifier()?;
                    self.cursor.advance();
                    let iterable = self.parse_expr()?;
                    self.cursor.expect_delimiter(")")?;
                    let body = self.parse_block()?;
                    return Ok(StmtKind::ForEach {
                        var,
                        iterable,
                        body,
                    });
                }
                Some(tok) if tok.is_operator("=") => {
                    Some(Box::new(Stmt::new(self.parse_var_tail()?, init_line)))
                }
                _ => {
                    self.cursor.advance();
                    return Err(self.cursor.error("expected ':' or '=' after loop variable"));
                }
            }
        } else if self.cursor.check_delimiter(";") {
            None
        } else {
            let expr = self.parse_expr()?;
            Some(Box::new(Stmt::new(StmtKind::Expr(expr), init_line)))
        };
        self.cursor.expect_delimiter(";")?;

        let cond = if self.cursor.check_delimiter(";") {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.cursor.expect_delimiter(";")?;

        let step = if self.cursor.check_delimiter(")") {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.cursor.expect_delimiter(")")?;

        let body = self.parse_block()?;
        Ok(StmtKind::For {
            init,
            cond,
            step,
            body,
        })
    }
}
