use super::*;
use pretty_assertions::assert_eq;

fn kinds_and_text(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .tokens
        .into_iter()
        .map(|tok| (tok.kind, tok.text))
        .collect()
}

fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_string())
}

#[test]
fn var_declaration() {
    use TokenKind::{Delimiter, Identifier, Keyword, Number, Operator};
    assert_eq!(
        kinds_and_text("var x = 42;"),
        vec![
            tok(Keyword, "var"),
            tok(Identifier, "x"),
            tok(Operator, "="),
            tok(Number, "42"),
            tok(Delimiter, ";"),
        ]
    );
}

#[test]
fn keywords_win_over_identifiers_only_on_exact_match() {
    use TokenKind::{Identifier, Keyword};
    assert_eq!(
        kinds_and_text("class classy null nullable"),
        vec![
            tok(Keyword, "class"),
            tok(Identifier, "classy"),
            tok(Keyword, "null"),
            tok(Identifier, "nullable"),
        ]
    );
}

#[test]
fn decimal_point_is_left_to_the_parser() {
    use TokenKind::{Delimiter, Number};
    assert_eq!(
        kinds_and_text("3.14"),
        vec![tok(Number, "3"), tok(Delimiter, "."), tok(Number, "14")]
    );
}

#[test]
fn operators_match_longest_first() {
    let ops: Vec<String> = tokenize("a >>>= b ++ c <= d ** e != f")
        .tokens
        .into_iter()
        .filter(|t| t.kind == TokenKind::Operator)
        .map(|t| t.text)
        .collect();
    assert_eq!(ops, vec![">>>=", "++", "<=", "**", "!="]);
}

#[test]
fn double_colon_is_two_delimiters() {
    use TokenKind::Delimiter;
    assert_eq!(
        kinds_and_text("::"),
        vec![tok(Delimiter, ":"), tok(Delimiter, ":")]
    );
}

#[test]
fn strings_drop_quotes_and_keep_contents() {
    use TokenKind::String;
    assert_eq!(
        kinds_and_text(r#""hello, world" "" "if""#),
        vec![tok(String, "hello, world"), tok(String, ""), tok(String, "if")]
    );
}

#[test]
fn comments_are_discarded() {
    use TokenKind::{Delimiter, Keyword};
    assert_eq!(
        kinds_and_text("// leading\nbreak; // trailing\n// last"),
        vec![tok(Keyword, "break"), tok(Delimiter, ";")]
    );
}

#[test]
fn lines_count_newlines_including_inside_strings() {
    let source = "a\nb \"one\ntwo\" c\n\nd";
    let lines: Vec<(String, u32)> = tokenize(source)
        .tokens
        .into_iter()
        .map(|t| (t.text, t.line))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("one\ntwo".to_string(), 2),
            ("c".to_string(), 3),
            ("d".to_string(), 5),
        ]
    );
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    let out = tokenize("print(\"never closed);\nvar x");
    assert!(out.errors.is_empty());
    let last = out.tokens.last().map(|t| (t.kind, t.text.clone()));
    assert_eq!(
        last,
        Some((TokenKind::String, "never closed);\nvar x".to_string()))
    );
}

#[test]
fn unknown_characters_are_reported_and_skipped() {
    let out = tokenize("var a = 1 @ 2;\n#");
    assert_eq!(
        out.errors,
        vec![
            LexError { found: '@', line: 1 },
            LexError { found: '#', line: 2 },
        ]
    );
    let texts: Vec<&str> = out.tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["var", "a", "=", "1", "2", ";"]);
}

#[test]
fn non_ascii_letters_are_unknown() {
    let out = tokenize("é");
    assert_eq!(out.errors, vec![LexError { found: 'é', line: 1 }]);
    assert!(out.tokens.is_empty());
}

#[test]
fn lex_error_display_names_line_and_character() {
    let err = LexError { found: '$', line: 9 };
    assert_eq!(err.to_string(), "line 9: unknown character '$'");
}

#[allow(clippy::unwrap_used, reason = "strategy regexes are literals")]
mod proptest_relex {
    use super::super::{render_tokens, tokenize};
    use oak_ir::TokenKind;
    use proptest::prelude::*;

    fn fragment() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,8}").unwrap(),
            prop::string::string_regex("[0-9]{1,6}").unwrap(),
            prop::string::string_regex("\"[a-z \n]{0,6}\"").unwrap(),
            prop::sample::select(vec![
                "+", "-", "*", "/", "%", "**", "=", "==", "!=", "<", "<=", ">", ">=", "&&",
                "||", "!", "~", "<<", ">>", ">>>", "&", "|", "^", "+=", ">>>=", "++", "--",
                "(", ")", "{", "}", "[", "]", ",", ":", ";", ".", "?", "var", "class",
                "null",
            ])
            .prop_map(String::from),
            Just(String::from(" ")),
            Just(String::from("\n")),
            Just(String::from("// note\n")),
        ]
    }

    fn source() -> impl Strategy<Value = String> {
        proptest::collection::vec(fragment(), 0..40).prop_map(|parts| parts.concat())
    }

    fn shape(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .tokens
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    proptest! {
        #[test]
        fn relexing_rendered_tokens_is_identity(src in source()) {
            let first = tokenize(&src);
            let rendered = render_tokens(&first.tokens);
            let again = shape(&rendered);
            let original: Vec<(TokenKind, String)> = first
                .tokens
                .into_iter()
                .map(|t| (t.kind, t.text))
                .collect();
            prop_assert_eq!(original, again);
        }

        #[test]
        fn lexing_never_loses_known_input(src in source()) {
            prop_assert!(tokenize(&src).errors.is_empty());
        }
    }
}
