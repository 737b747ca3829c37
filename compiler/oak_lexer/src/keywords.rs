//! Reserved words.
//!
//! Every entry lexes as `TokenKind::Keyword`, whether or not the
//! interpreter gives it meaning (`switch`, `try`, `map`, ... are reserved
//! only).

pub const KEYWORDS: [&str; 32] = [
    "class",
    "interface",
    "const",
    "var",
    "def",
    "if",
    "else",
    "while",
    "for",
    "switch",
    "in",
    "break",
    "continue",
    "throw",
    "try",
    "catch",
    "finally",
    "import",
    "export",
    "new",
    "this",
    "super",
    "case",
    "return",
    "print",
    "true",
    "false",
    "null",
    "list",
    "map",
    "set",
    "tuple",
];

#[inline]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}
