//! Oak IR - token and syntax tree types.
//!
//! This crate holds the vocabulary shared by every phase:
//! - [`Token`] / [`TokenKind`]: lexer output
//! - [`ClassDecl`], [`Stmt`], [`Expr`]: parser output, interpreter input
//! - [`BinaryOp`], [`UnaryOp`], [`IncDecOp`]: typed operators
//!
//! Nodes are plain owned trees (`Box`/`Vec` children). They carry the source
//! line of their first token and no other behaviour.

pub mod ast;
mod token;

pub use ast::{
    BinaryOp, ClassDecl, ElseIf, Expr, ExprKind, FunctionDecl, IncDecOp, NumberLiteral, Stmt,
    StmtKind, UnaryOp,
};
pub use token::{Token, TokenKind};
