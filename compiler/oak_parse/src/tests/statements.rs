use oak_ir::{ExprKind, NumberLiteral, StmtKind};
use pretty_assertions::assert_eq;

use super::{body_error, main_body, parse_source};
use crate::MAX_NESTING_DEPTH;

#[test]
fn class_with_methods_and_parameters() {
    let class = parse_source(
        "class Calc {
            def add(a, b) { return a + b; }
            def main() { print(add(1, 2)); }
        }",
    )
    .unwrap();

    assert_eq!(class.name, "Calc");
    let names: Vec<&str> = class.functions().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["add", "main"]);
    assert_eq!(class.function("add").unwrap().params, vec!["a", "b"]);
    assert_eq!(class.function("main").unwrap().line, 3);
}

#[test]
fn empty_class_is_allowed() {
    let class = parse_source("class Empty {}").unwrap();
    assert!(class.members.is_empty());
}

#[test]
fn var_print_return_break_continue() {
    let body = main_body("var x = 1; print(x); return; return x; break; continue;");
    let kinds: Vec<&StmtKind> = body.iter().map(|s| &s.kind).collect();
    assert!(matches!(kinds[0], StmtKind::Var { name, .. } if name == "x"));
    assert!(matches!(kinds[1], StmtKind::Print(_)));
    assert!(matches!(kinds[2], StmtKind::Return(None)));
    assert!(matches!(kinds[3], StmtKind::Return(Some(_))));
    assert!(matches!(kinds[4], StmtKind::Break));
    assert!(matches!(kinds[5], StmtKind::Continue));
}

#[test]
fn if_else_if_chain() {
    let body = main_body(
        "if (a) { print(1); } else if (b) { print(2); } else if (c) { } else { print(3); }",
    );
    let StmtKind::If {
        then_body,
        else_ifs,
        else_body,
        ..
    } = &body[0].kind
    else {
        panic!("expected if");
    };
    assert_eq!(then_body.len(), 1);
    assert_eq!(else_ifs.len(), 2);
    assert!(else_ifs[1].body.is_empty());
    assert_eq!(else_body.as_ref().map(Vec::len), Some(1));
}

#[test]
fn if_without_else() {
    let body = main_body("if (x) { }");
    assert!(matches!(
        &body[0].kind,
        StmtKind::If { else_ifs, else_body: None, .. } if else_ifs.is_empty()
    ));
}

#[test]
fn classic_for_with_var_init() {
    let body = main_body("for (var i = 0; i < 3; i = i + 1) { print(i); }");
    let StmtKind::For {
        init,
        cond,
        step,
        body,
    } = &body[0].kind
    else {
        panic!("expected for");
    };
    assert!(matches!(
        init.as_deref().map(|s| &s.kind),
        Some(StmtKind::Var { name, .. }) if name == "i"
    ));
    assert!(cond.is_some());
    assert!(step.is_some());
    assert_eq!(body.len(), 1);
}

#[test]
fn classic_for_with_empty_clauses() {
    let body = main_body("for (;;) { break; }");
    assert!(matches!(
        &body[0].kind,
        StmtKind::For { init: None, cond: None, step: None, .. }
    ));
}

#[test]
fn classic_for_with_expression_init() {
    let body = main_body("for (i = 0; i < 2; i++) { }");
    let StmtKind::For { init: Some(init), .. } = &body[0].kind else {
        panic!("expected for with init");
    };
    assert!(matches!(
        &init.kind,
        StmtKind::Expr(e) if matches!(e.kind, ExprKind::Assign { .. })
    ));
}

#[test]
fn for_each_is_chosen_by_colon() {
    let body = main_body("for (var item : items) { print(item); }");
    let StmtKind::ForEach { var, iterable, .. } = &body[0].kind else {
        panic!("expected for-each");
    };
    assert_eq!(var, "item");
    assert_eq!(iterable.kind, ExprKind::Variable("items".into()));
}

#[test]
fn for_var_needs_colon_or_equals() {
    let err = body_error("for (var i ; ; ) { }");
    assert_eq!(err.message, "expected ':' or '=' after loop variable");
    assert_eq!(err.found, "';'");
}

#[test]
fn bare_call_statement() {
    let body = main_body("greet();");
    let StmtKind::Expr(e) = &body[0].kind else {
        panic!("expected expression statement");
    };
    assert!(matches!(&e.kind, ExprKind::Call { name, args } if name == "greet" && args.is_empty()));
}

#[test]
fn nested_function_declaration_is_a_statement() {
    let body = main_body("def inner() { return 1; }");
    assert!(matches!(&body[0].kind, StmtKind::Function(f) if f.name == "inner"));
}

#[test]
fn double_literal_in_var() {
    let body = main_body("var half = 0.5;");
    let StmtKind::Var { init, .. } = &body[0].kind else {
        panic!("expected var");
    };
    assert_eq!(init.kind, ExprKind::Number(NumberLiteral::Double(0.5)));
}

#[test]
fn missing_semicolon_reports_line() {
    let err = parse_source("class T {\n def main() {\n  var x = 1\n  print(x);\n }\n}").unwrap_err();
    assert_eq!(err.line, 4);
    assert_eq!(err.message, "expected ';'");
    assert_eq!(err.found, "'print'");
}

#[test]
fn missing_class_keyword() {
    let err = parse_source("def main() { }").unwrap_err();
    assert_eq!(err.message, "expected 'class'");
}

#[test]
fn unclosed_class_body_hits_end_of_input() {
    let err = parse_source("class T { def main() { }").unwrap_err();
    assert_eq!(err.found, "end of input");
}

#[test]
fn tokens_after_class_are_rejected() {
    let err = parse_source("class A { } class B { }").unwrap_err();
    assert_eq!(err.message, "unexpected token after class body");
    assert_eq!(err.found, "'class'");
}

#[test]
fn deeply_nested_blocks_parse() {
    let depth = MAX_NESTING_DEPTH - 8;
    let body = format!("{}{}", "while (true) { ".repeat(depth), "}".repeat(depth));
    assert_eq!(main_body(&body).len(), 1);
}

#[test]
fn nesting_past_the_limit_is_rejected() {
    let depth = MAX_NESTING_DEPTH + 1;
    let body = format!("{}{}", "while (true) { ".repeat(depth), "}".repeat(depth));
    let err = body_error(&body);
    assert_eq!(err.message, format!("nesting exceeds {MAX_NESTING_DEPTH} levels"));
    assert_eq!(err.line, 1);
}

#[test]
fn runaway_nesting_fails_without_crashing() {
    let depth = 100_000;
    let body = format!("{}{}", "while (true) { ".repeat(depth), "}".repeat(depth));
    let err = body_error(&body);
    assert!(err.message.starts_with("nesting exceeds"));
    assert_eq!(err.found, "'while'");
}
