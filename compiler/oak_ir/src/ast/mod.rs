//! Syntax tree produced by the parser.
//!
//! A program is one or more [`ClassDecl`]s. Class members are statements;
//! in practice they are function declarations, but the grammar admits any
//! statement there.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, NumberLiteral};
pub use operators::{BinaryOp, IncDecOp, UnaryOp};
pub use stmt::{ClassDecl, ElseIf, FunctionDecl, Stmt, StmtKind};
