use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_shows_kind_line_and_text() {
    let tok = Token::new(TokenKind::Keyword, "while", 7);
    assert_eq!(tok.to_string(), "[Keyword] Line 7: while");
}

#[test]
fn is_matches_kind_and_text_together() {
    let tok = Token::new(TokenKind::Delimiter, "(", 1);
    assert!(tok.is_delimiter("("));
    assert!(!tok.is_operator("("));
    assert!(!tok.is_delimiter(")"));
}

#[test]
fn string_tokens_do_not_match_keywords() {
    let tok = Token::new(TokenKind::String, "if", 1);
    assert!(!tok.is_keyword("if"));
}
