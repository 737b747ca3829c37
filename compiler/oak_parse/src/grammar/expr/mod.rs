//! Expression parsing.
//!
//! Precedence, lowest first:
//!
//! | Tier | Operators | Assoc |
//! |---|---|---|
//! | assignment | `= += -= *= /= %= &= \|= ^= <<= >>= >>>=` | right |
//! | ternary | `? :` | right |
//! | logical or / and | `\|\|`, `&&` | left |
//! | bitwise or / xor / and | `\|`, `^`, `&` | left |
//! | equality, comparison | `== !=`, `< <= > >=` | left |
//! | shift | `<< >> >>>` | left |
//! | additive, multiplicative | `+ -`, `* / %` | left |
//! | exponent | `**` | right |
//! | prefix | `+ - ! ~ ++ --` | |
//! | postfix | `++ --` | |
//!
//! - `operators.rs`: operator tables per tier and matching helpers
//! - `primary.rs`: literals, names, calls and the `[i]` / `.name` suffix chain

mod operators;
mod primary;

use oak_ir::{BinaryOp, Expr, ExprKind};

use crate::{ParseError, Parser};

use operators::{
    Assignment, ADDITIVE, BIT_AND, BIT_OR, BIT_XOR, COMPARISON, EQUALITY, EXPONENT,
    LOGICAL_AND, LOGICAL_OR, MULTIPLICATIVE, SHIFT,
};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Counted against `MAX_NESTING_DEPTH`: parenthesised and nested
    /// expressions recurse through here.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.descend(Self::parse_assignment)
    }

    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_ternary()?;
        let found = self.cursor.current().map(|tok| format!("'{}'", tok.text));
        let Some(assignment) = self.eat_assignment_op() else {
            return Ok(target);
        };

        let line = target.line;
        let Some(name) = target.as_variable().map(str::to_owned) else {
            return Err(ParseError::new(
                line,
                "assignment target must be a variable",
                found.unwrap_or_default(),
            ));
        };
        let value = Box::new(self.parse_expr()?);

        let kind = match assignment {
            Assignment::Plain => ExprKind::Assign {
                target: name,
                value,
            },
            Assignment::Compound(op) => ExprKind::CompoundAssign {
                target: name,
                op,
                value,
            },
        };
        Ok(Expr::new(kind, line))
    }

    fn parse_ternary(&mut self) -> Result<Expr, ParseError> {
        let cond = self.parse_logical_or()?;
        if !self.cursor.eat_delimiter("?") {
            return Ok(cond);
        }
        let then_expr = self.parse_expr()?;
        self.cursor.expect_delimiter(":")?;
        let else_expr = self.descend(Self::parse_ternary)?;
        let line = cond.line;
        Ok(Expr::new(
            ExprKind::Ternary {
                cond: Box::new(cond),
                then_expr: Box::new(then_expr),
                else_expr: Box::new(else_expr),
            },
            line,
        ))
    }

    /// Parse one left-associative tier: `next (op next)*`.
    fn parse_left_assoc(
        &mut self,
        ops: &[BinaryOp],
        next: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        self.restoring_depth(|parser| {
            let mut left = next(parser)?;
            while let Some(op) = parser.eat_binary_op(ops) {
                // each fold deepens the left spine
                parser.enter_nested()?;
                let right = next(parser)?;
                left = binary(left, op, right);
            }
            Ok(left)
        })
    }

    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(LOGICAL_OR, Self::parse_logical_and)
    }

    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(LOGICAL_AND, Self::parse_bit_or)
    }

    fn parse_bit_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(BIT_OR, Self::parse_bit_xor)
    }

    fn parse_bit_xor(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(BIT_XOR, Self::parse_bit_and)
    }

    fn parse_bit_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(BIT_AND, Self::parse_equality)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(EQUALITY, Self::parse_comparison)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(COMPARISON, Self::parse_shift)
    }

    fn parse_shift(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(SHIFT, Self::parse_additive)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(ADDITIVE, Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(MULTIPLICATIVE, Self::parse_exponent)
    }

    /// `prefix (** exponent)?`, right-associative.
    fn parse_exponent(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_prefix()?;
        match self.eat_binary_op(EXPONENT) {
            Some(op) => {
                let exponent = self.descend(Self::parse_exponent)?;
                Ok(binary(base, op, exponent))
            }
            None => Ok(base),
        }
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let line = self.cursor.line();
        let found = self.cursor.current().map(|tok| format!("'{}'", tok.text));

        if let Some(op) = self.eat_inc_dec_op() {
            let operand = self.descend(Self::parse_prefix)?;
            let Some(target) = operand.as_variable() else {
                return Err(ParseError::new(
                    line,
                    "increment/decrement target must be a variable",
                    found.unwrap_or_default(),
                ));
            };
            return Ok(Expr::new(
                ExprKind::IncDec {
                    target: target.to_owned(),
                    op,
                    prefix: true,
                },
                line,
            ));
        }

        if let Some(op) = self.eat_unary_op() {
            let operand = self.descend(Self::parse_prefix)?;
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                line,
            ));
        }

        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            let found = self.cursor.current().map(|tok| format!("'{}'", tok.text));
            let Some(op) = self.eat_inc_dec_op() else {
                return Ok(expr);
            };
            let Some(target) = expr.as_variable() else {
                return Err(ParseError::new(
                    expr.line,
                    "increment/decrement target must be a variable",
                    found.unwrap_or_default(),
                ));
            };
            expr = Expr::new(
                ExprKind::IncDec {
                    target: target.to_owned(),
                    op,
                    prefix: false,
                },
                expr.line,
            );
        }
    }
}

fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    let line = left.line;
    Expr::new(
        ExprKind::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        line,
    )
}
