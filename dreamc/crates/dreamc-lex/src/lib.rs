//! dreamc-lex - Lexical Analyzer for the DreamLang Programming Language
//!
//! This crate turns DreamLang source text into a flat sequence of tokens,
//! each carrying the line and column of its first character.
//!
//! # Example Usage
//!
//! ```
//! use dreamc_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("val answer = 42\n");
//!
//! // Tokens one at a time
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind(), TokenKind::Keyword);
//!
//! // Or everything at once, ending with EOF_TOKEN
//! lexer.reset();
//! let tokens = lexer.tokenize().unwrap();
//! assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::EofToken));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`keywords`] - Reserved word table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical errors and their localized rendering
//! - [`serialize`] - JSON and TOML export of token streams
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `bool number char string function array class object reference package
//! import var val ref return fun if else for while break continue switch
//! case default super this available in interface abstract`
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14`, `6.02e23` (kept as text)
//! - **String**: `"hello\n"`, may span lines
//! - **Char**: `'a'`, `'\t'`
//! - **Special**: `null`, `true`, `false`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`, `**`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`
//! - **Assignment**: `=`
//!
//! ## Delimiters
//!
//! `.` `,` `:` `;` `(` `)` `[` `]` `{` `}`
//!
//! ## Line breaks
//!
//! Newlines are tokens (`LINEBREAK`). Spaces, tabs, carriage returns and
//! comments (`//` and non-nesting `/* */`) are skipped.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod serialize;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexErrorKind, LexicalError};
pub use keywords::{classify_word, is_keyword, KEYWORDS};
pub use lexer::Lexer;
pub use serialize::{Format, SerializeError, TokenRecord};
pub use token::{ParseTokenKindError, Token, TokenKind};

/// Tokenizes `source` in one call.
///
/// Equivalent to `Lexer::new(source).tokenize()`.
pub fn tokenize(source: &str) -> error::Result<Vec<Token>> {
    Lexer::new(source).tokenize()
}
