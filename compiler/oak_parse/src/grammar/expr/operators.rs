//! Operator Matching Helpers
//!
//! Each helper consumes the current token when it is an operator of the
//! requested class and returns the typed operator.

use oak_ir::{BinaryOp, IncDecOp, TokenKind, UnaryOp};

use crate::Parser;

pub(super) const LOGICAL_OR: &[BinaryOp] = &[BinaryOp::Or];
pub(super) const LOGICAL_AND: &[BinaryOp] = &[BinaryOp::And];
pub(super) const BIT_OR: &[BinaryOp] = &[BinaryOp::BitOr];
pub(super) const BIT_XOR: &[BinaryOp] = &[BinaryOp::BitXor];
pub(super) const BIT_AND: &[BinaryOp] = &[BinaryOp::BitAnd];
pub(super) const EQUALITY: &[BinaryOp] = &[BinaryOp::Eq, BinaryOp::NotEq];
pub(super) const COMPARISON: &[BinaryOp] =
    &[BinaryOp::Lt, BinaryOp::LtEq, BinaryOp::Gt, BinaryOp::GtEq];
pub(super) const SHIFT: &[BinaryOp] = &[BinaryOp::Shl, BinaryOp::Shr, BinaryOp::UShr];
pub(super) const ADDITIVE: &[BinaryOp] = &[BinaryOp::Add, BinaryOp::Sub];
pub(super) const MULTIPLICATIVE: &[BinaryOp] = &[BinaryOp::Mul, BinaryOp::Div, BinaryOp::Mod];
pub(super) const EXPONENT: &[BinaryOp] = &[BinaryOp::Pow];

/// Outcome of matching an assignment operator.
pub(super) enum Assignment {
    Plain,
    Compound(BinaryOp),
}

impl Parser<'_> {
    /// Text of the current token if it is an operator.
    fn current_operator(&self) -> Option<&str> {
        self.cursor
            .current()
            .filter(|tok| tok.kind == TokenKind::Operator)
            .map(|tok| tok.text.as_str())
    }

    pub(super) fn eat_binary_op(&mut self, ops: &[BinaryOp]) -> Option<BinaryOp> {
        let symbol = self.current_operator()?;
        let op = ops.iter().copied().find(|op| op.as_symbol() == symbol)?;
        self.cursor.advance();
        Some(op)
    }

    pub(super) fn eat_unary_op(&mut self) -> Option<UnaryOp> {
        let op = UnaryOp::from_symbol(self.current_operator()?)?;
        self.cursor.advance();
        Some(op)
    }

    pub(super) fn eat_inc_dec_op(&mut self) -> Option<IncDecOp> {
        let op = IncDecOp::from_symbol(self.current_operator()?)?;
        self.cursor.advance();
        Some(op)
    }

    pub(super) fn eat_assignment_op(&mut self) -> Option<Assignment> {
        let symbol = self.current_operator()?;
        let assignment = if symbol == "=" {
            Assignment::Plain
        } else {
            Assignment::Compound(BinaryOp::from_compound_symbol(symbol)?)
        };
        self.cursor.advance();
        Some(assignment)
    }
}
