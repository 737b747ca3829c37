use super::*;
use pretty_assertions::assert_eq;

fn tokens() -> Vec<Token> {
    vec![
        Token::new(TokenKind::Keyword, "var", 1),
        Token::new(TokenKind::Identifier, "x", 1),
        Token::new(TokenKind::Operator, "+=", 2),
    ]
}

#[test]
fn eat_only_consumes_on_match() {
    let toks = tokens();
    let mut cursor = Cursor::new(&toks);
    assert!(!cursor.eat_keyword("def"));
    assert_eq!(cursor.position(), 0);
    assert!(cursor.eat_keyword("var"));
    assert_eq!(cursor.position(), 1);
}

#[test]
fn eat_operator_returns_matched_text() {
    let toks = tokens();
    let mut cursor = Cursor::new(&toks);
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.eat_operator(&["-=", "+="]), Some("+="));
    assert!(cursor.is_at_end());
}

#[test]
fn expect_identifier_yields_name() {
    let toks = tokens();
    let mut cursor = Cursor::new(&toks);
    cursor.advance();
    assert_eq!(cursor.expect_identifier(), Ok("x".to_string()));
}

#[test]
fn expect_failure_reports_current_token() {
    let toks = tokens();
    let mut cursor = Cursor::new(&toks);
    let err = cursor.expect_delimiter("(").unwrap_err();
    assert_eq!(err, ParseError::new(1, "expected '('", "'var'"));
}

#[test]
fn errors_at_end_use_last_line() {
    let toks = tokens();
    let mut cursor = Cursor::new(&toks);
    while cursor.advance().is_some() {}
    let err = cursor.expect_identifier().unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.found, "end of input");
    assert_eq!(err.to_string(), "line 2: expected identifier (found end of input)");
}

#[test]
fn peek_looks_past_current() {
    let toks = tokens();
    let cursor = Cursor::new(&toks);
    assert_eq!(cursor.peek(1).map(|t| t.text.as_str()), Some("x"));
    assert_eq!(cursor.peek(3), None);
}
