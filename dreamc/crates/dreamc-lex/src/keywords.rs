//! Reserved words.

use crate::token::TokenKind;

/// DreamLang's reserved words, sorted for binary search.
///
/// `null`, `true` and `false` are listed here but [`classify_word`] gives
/// them their own literal kinds.
pub const KEYWORDS: [&str; 34] = [
    "abstract",
    "array",
    "available",
    "bool",
    "break",
    "case",
    "char",
    "class",
    "continue",
    "default",
    "else",
    "false",
    "for",
    "fun",
    "function",
    "if",
    "import",
    "in",
    "interface",
    "null",
    "number",
    "object",
    "package",
    "ref",
    "reference",
    "return",
    "string",
    "super",
    "switch",
    "this",
    "true",
    "val",
    "var",
    "while",
];

/// Returns true if `text` is a reserved word. Exact match only.
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.binary_search(&text).is_ok()
}

/// Classifies a complete identifier-like run.
///
/// The literal spellings are checked before the keyword table.
///
/// # Example
///
/// ```
/// use dreamc_lex::{classify_word, TokenKind};
///
/// assert_eq!(classify_word("null"), TokenKind::NullLiteral);
/// assert_eq!(classify_word("while"), TokenKind::Keyword);
/// assert_eq!(classify_word("whilst"), TokenKind::Ident);
/// ```
pub fn classify_word(text: &str) -> TokenKind {
    match text {
        "null" => TokenKind::NullLiteral,
        "true" => TokenKind::BoolTrue,
        "false" => TokenKind::BoolFalse,
        _ if is_keyword(text) => TokenKind::Keyword,
        _ => TokenKind::Ident,
    }
}
