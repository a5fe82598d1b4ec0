//! Edge case and property tests for dreamc-lex

use crate::{tokenize, LexErrorKind, Lexer, Token, TokenKind};
use proptest::prelude::*;

fn lex_all(source: &str) -> Vec<Token> {
    tokenize(source).unwrap()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex_all(source).iter().map(|t| t.kind()).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_only_whitespace() {
    assert_eq!(kinds(" \t\r  "), vec![TokenKind::EofToken]);
}

#[test]
fn test_edge_crlf_line_endings() {
    let tokens = lex_all("a\r\nb");
    assert_eq!(tokens[1].kind(), TokenKind::Linebreak);
    assert_eq!((tokens[2].line(), tokens[2].column()), (2, 1));
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10_000);
    let tokens = lex_all(&format!("var {name} = 1"));
    assert_eq!(tokens[1].text(), name);
    assert_eq!(tokens[2].column(), 10_006);
}

#[test]
fn test_edge_power_vs_mult() {
    assert_eq!(
        kinds("2**3*4"),
        vec![
            TokenKind::Number,
            TokenKind::Power,
            TokenKind::Number,
            TokenKind::Mult,
            TokenKind::Number,
            TokenKind::EofToken,
        ]
    );
}

#[test]
fn test_edge_logical_operators() {
    assert_eq!(
        kinds("a&&!b||c"),
        vec![
            TokenKind::Ident,
            TokenKind::LogicalAnd,
            TokenKind::LogicalNot,
            TokenKind::Ident,
            TokenKind::LogicalOr,
            TokenKind::Ident,
            TokenKind::EofToken,
        ]
    );
}

#[test]
fn test_edge_comment_markers_inside_string() {
    let tokens = lex_all("\"// not /* a comment\"");
    assert_eq!(tokens[0].kind(), TokenKind::String);
    assert_eq!(tokens[0].text(), "// not /* a comment");
}

#[test]
fn test_edge_quote_inside_char_and_string() {
    let tokens = lex_all(r#"'"' "'""#);
    assert_eq!(tokens[0].text(), "\"");
    assert_eq!(tokens[1].text(), "'");
}

#[test]
fn test_edge_division_then_comment() {
    assert_eq!(
        kinds("a / b // c"),
        vec![TokenKind::Ident, TokenKind::Divide, TokenKind::Ident, TokenKind::EofToken]
    );
}

#[test]
fn test_edge_number_followed_by_dot_dot() {
    assert_eq!(
        kinds("1..2"),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Dot, TokenKind::Number, TokenKind::EofToken]
    );
}

#[test]
fn test_edge_exponent_letter_alone() {
    let err = tokenize("3e").unwrap_err();
    assert_eq!(err.kind(), &LexErrorKind::InvalidNumber);
}

#[test]
fn test_edge_unterminated_string_on_later_line() {
    let err = tokenize("var s =\n  \"open\nstill open").unwrap_err();
    assert_eq!(err.kind(), &LexErrorKind::UnterminatedString);
    assert_eq!((err.line(), err.column()), (3, 11));
}

#[test]
fn test_edge_escaped_newline_is_invalid() {
    let err = tokenize("\"a\\\nb\"").unwrap_err();
    assert_eq!(err.kind(), &LexErrorKind::InvalidEscape);
    assert_eq!(err.character(), Some('\n'));
}

#[test]
fn test_edge_nul_escape() {
    let tokens = lex_all(r#""\0""#);
    assert_eq!(tokens[0].text(), "\0");
}

// ==================== PROPERTIES ====================

/// Source fragments that lex to exactly their own text.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
        "[0-9]{1,6}(\\.[0-9]{1,4})?([eE][+-]?[0-9]{1,3})?",
        prop::sample::select(vec![
            "=", "==", "!", "!=", "<", "<=", ">", ">=", "&&", "||", "*", "**", "+", "-", "/", "%",
            ".", ",", ":", ";", "(", ")", "[", "]", "{", "}",
        ])
        .prop_map(str::to_string),
    ]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", "  ", "\t", "\n", " \n ", "\r\n"])
}

proptest! {
    #[test]
    fn prop_tokens_reconstruct_source(
        parts in prop::collection::vec((fragment(), separator()), 0..40)
    ) {
        let source: String = parts.iter().map(|(f, s)| format!("{f}{s}")).collect();
        let tokens = tokenize(&source).unwrap();
        let lines: Vec<&str> = source.split('\n').collect();

        let mut texts = Vec::new();
        for token in tokens.iter().filter(|t| !t.is_eof() && t.kind() != TokenKind::Linebreak) {
            let line = lines[(token.line() - 1) as usize];
            let rest: String = line.chars().skip((token.column() - 1) as usize).collect();
            prop_assert!(rest.starts_with(token.text()), "{} not found at its position", token);
            texts.push(token.text().to_string());
        }

        let without_blanks: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(texts.concat(), without_blanks);
    }

    #[test]
    fn prop_reset_reproduces_tokens(source in "[ -~\n]{0,200}") {
        let mut lexer = Lexer::new(&source);
        let first = lexer.tokenize();
        lexer.reset();
        let second = lexer.tokenize();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_never_panics(source in "\\PC{0,200}") {
        let _ = tokenize(&source);
    }

    #[test]
    fn prop_identifier_is_single_token(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}") {
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].text(), input.as_str());
        prop_assert!(matches!(
            tokens[0].kind(),
            TokenKind::Ident | TokenKind::Keyword | TokenKind::NullLiteral
                | TokenKind::BoolTrue | TokenKind::BoolFalse
        ));
    }

    #[test]
    fn prop_plain_string_literal(input in "[^\"\\\\]{0,100}") {
        let tokens = lex_all(&format!("\"{input}\""));
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind(), TokenKind::String);
        prop_assert_eq!(tokens[0].text(), input.as_str());
    }

    #[test]
    fn prop_eof_is_last_and_unique(source in "[a-df-z0-9 +*=\n]{0,100}") {
        let tokens = lex_all(&source);
        prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }
}
