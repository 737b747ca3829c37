//! Expression nodes.

use super::operators::{BinaryOp, IncDecOp, UnaryOp};

/// Numeric literal, tagged at parse time by the presence of a decimal point.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum NumberLiteral {
    Int(i64),
    Double(f64),
}

/// Expression node: a kind plus the line of its first token.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: u32,
}

impl Expr {
    pub fn new(kind: ExprKind, line: u32) -> Self {
        Expr { kind, line }
    }

    /// The variable name if this expression is a bare variable reference.
    pub fn as_variable(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Variable(name) => Some(name),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    Bool(bool),
    Number(NumberLiteral),
    Str(String),
    Null,

    /// Name lookup in the current call scope.
    Variable(String),

    /// `target = value`; the target must already be declared.
    Assign {
        target: String,
        value: Box<Expr>,
    },

    /// `target op= value`, with `op` the operator minus its trailing `=`.
    CompoundAssign {
        target: String,
        op: BinaryOp,
        value: Box<Expr>,
    },

    /// `++x`, `x++`, `--x`, `x--`.
    IncDec {
        target: String,
        op: IncDecOp,
        prefix: bool,
    },

    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },

    Ternary {
        cond: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },

    /// Call of a method on the class that is currently executing.
    Call {
        name: String,
        args: Vec<Expr>,
    },

    /// `target.method(args)`.
    MethodCall {
        target: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },

    /// `list(a, b)` or `[a, b]`.
    List(Vec<Expr>),

    Index {
        target: Box<Expr>,
        index: Box<Expr>,
    },

    /// `target.name` without a call.
    Property {
        target: Box<Expr>,
        name: String,
    },

    /// `new Name()`; `args` is always empty in the current grammar.
    New {
        class: String,
        args: Vec<Expr>,
    },

    This,
}
