//! Parser tests.
//!
//! - `expressions`: precedence, associativity, primaries and suffix chains
//! - `statements`: statement forms, class structure and error reporting

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod statements;

use oak_ir::{ClassDecl, Expr, Stmt, StmtKind};

use crate::{parse, ParseError};

pub(super) fn parse_source(source: &str) -> Result<ClassDecl, ParseError> {
    let lexed = oak_lexer::tokenize(source);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    parse(&lexed.tokens)
}

/// Parse `body` as the body of `def main() { .. }` and return its statements.
pub(super) fn main_body(body: &str) -> Vec<Stmt> {
    let class = parse_source(&format!("class T {{ def main() {{ {body} }} }}")).unwrap();
    class
        .members
        .into_iter()
        .find_map(|member| match member.kind {
            StmtKind::Function(function) if function.name == "main" => Some(function.body),
            _ => None,
        })
        .expect("main")
}

/// Parse a single expression statement.
pub(super) fn expr(source: &str) -> Expr {
    let mut body = main_body(&format!("{source};"));
    assert_eq!(body.len(), 1);
    match body.remove(0).kind {
        StmtKind::Expr(expr) => expr,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

/// Parse `source` inside `main` and return the error.
pub(super) fn body_error(body: &str) -> ParseError {
    parse_source(&format!("class T {{ def main() {{ {body} }} }}")).unwrap_err()
}
