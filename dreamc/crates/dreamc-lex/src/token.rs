//! Token definitions for DreamLang.
//!
//! A [`Token`] pairs a [`TokenKind`] with the literal text it was read from
//! and the line/column of its first character. Tokens own their text, so
//! they stay valid after the lexer and the source buffer are gone.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of token kinds.
///
/// The serialized names (`IDENT`, `EOF_TOKEN`, ...) are part of the exported
/// token format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Reserved for input that could not be classified.
    Illegal,
    /// Identifier.
    Ident,
    /// `null`.
    NullLiteral,
    /// Numeric literal, kept as raw text.
    Number,
    /// `true`.
    BoolTrue,
    /// `false`.
    BoolFalse,
    /// String literal with escapes already decoded.
    String,
    /// Character literal with escapes already decoded.
    Char,
    /// Line comment. Comments are skipped, so this kind is never produced.
    SingleComment,
    /// Block comment. Never produced.
    MultiComment,
    /// Reserved word.
    Keyword,
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `**`
    Power,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `!`
    LogicalNot,
    /// A newline. Line breaks are significant to later stages.
    Linebreak,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// End of input.
    EofToken,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 39] = [
        TokenKind::Illegal,
        TokenKind::Ident,
        TokenKind::NullLiteral,
        TokenKind::Number,
        TokenKind::BoolTrue,
        TokenKind::BoolFalse,
        TokenKind::String,
        TokenKind::Char,
        TokenKind::SingleComment,
        TokenKind::MultiComment,
        TokenKind::Keyword,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Mult,
        TokenKind::Divide,
        TokenKind::Modulo,
        TokenKind::Power,
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::Greater,
        TokenKind::Less,
        TokenKind::GreaterEqual,
        TokenKind::LessEqual,
        TokenKind::LogicalAnd,
        TokenKind::LogicalOr,
        TokenKind::LogicalNot,
        TokenKind::Linebreak,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::EofToken,
    ];

    /// Returns the wire name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::NullLiteral => "NULL_LITERAL",
            TokenKind::Number => "NUMBER",
            TokenKind::BoolTrue => "BOOL_TRUE",
            TokenKind::BoolFalse => "BOOL_FALSE",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::SingleComment => "SINGLE_COMMENT",
            TokenKind::MultiComment => "MULTI_COMMENT",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Modulo => "MODULO",
            TokenKind::Power => "POWER",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::Less => "LESS",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::LogicalNot => "LOGICAL_NOT",
            TokenKind::Linebreak => "LINEBREAK",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::EofToken => "EOF_TOKEN",
        }
    }

    /// Returns true for the operator kinds, `=` through `!`.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Mult
                | TokenKind::Divide
                | TokenKind::Modulo
                | TokenKind::Power
                | TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::Greater
                | TokenKind::Less
                | TokenKind::GreaterEqual
                | TokenKind::LessEqual
                | TokenKind::LogicalAnd
                | TokenKind::LogicalOr
                | TokenKind::LogicalNot
        )
    }

    /// Returns true for literal kinds (null, numbers, booleans, strings, chars).
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::NullLiteral
                | TokenKind::Number
                | TokenKind::BoolTrue
                | TokenKind::BoolFalse
                | TokenKind::String
                | TokenKind::Char
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown token kind name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown token kind '{0}'")]
pub struct ParseTokenKindError(pub String);

impl FromStr for TokenKind {
    type Err = ParseTokenKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseTokenKindError(s.to_string()))
    }
}

/// A single lexical unit.
///
/// # Example
///
/// ```
/// use dreamc_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Ident, "count", 3, 5);
/// assert_eq!(token.to_string(), r#"Token{type=IDENT, value="count", line=3, column=5}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
    line: u32,
    column: u32,
}

impl Token {
    /// Creates a token starting at `line`/`column` (both 1-based).
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Creates the end-of-input token.
    pub fn eof(line: u32, column: u32) -> Self {
        Self::new(TokenKind::EofToken, String::new(), line, column)
    }

    /// The kind of this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's text. Escape sequences in string and char literals are decoded.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line of the first character (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the first character (1-based, in characters).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EofToken
    }

    /// Returns true for reserved words.
    pub fn is_keyword(&self) -> bool {
        self.kind == TokenKind::Keyword
    }

    /// See [`TokenKind::is_operator`].
    pub fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }

    /// See [`TokenKind::is_literal`].
    pub fn is_literal(&self) -> bool {
        self.kind.is_literal()
    }

    /// Consumes the token, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token{{type={}, value=\"{}\", line={}, column={}}}",
            self.kind, self.text, self.line, self.column
        )
    }
}
