//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the per-token dispatch and
//! the helpers the other lexer modules use to build tokens and errors.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{LexErrorKind, LexicalError, Result};
use crate::token::{Token, TokenKind};

/// Lexer for DreamLang source.
///
/// The lexer reads a borrowed source string and produces owned [`Token`]s.
/// It stops at the first malformed construct; there is no recovery.
///
/// # Example
///
/// ```
/// use dreamc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("var x = 42");
/// let kinds: Vec<_> = lexer
///     .tokenize()
///     .unwrap()
///     .iter()
///     .map(|t| t.kind())
///     .collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Keyword,
///         TokenKind::Ident,
///         TokenKind::Assign,
///         TokenKind::Number,
///         TokenKind::EofToken,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Set once the iterator has produced EOF or an error.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer positioned at line 1, column 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            finished: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips blanks and comments, then dispatches on the current character.
    /// At end of input this keeps returning the EOF token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexicalError`] for the first malformed construct.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments()?;
        self.start_token();

        let Some(c) = self.cursor.current_char() else {
            return Ok(self.make_token(TokenKind::EofToken, String::new()));
        };

        let token = match c {
            '\n' => {
                self.cursor.advance();
                self.make_token(TokenKind::Linebreak, "\n")
            },
            '"' => self.lex_string()?,
            '\'' => self.lex_char()?,
            c if c.is_ascii_digit() => self.lex_number()?,
            c if is_ident_start(c) => self.lex_identifier(),
            c => self.lex_operator(c)?,
        };

        trace!(
            kind = %token.kind(),
            line = token.line(),
            column = token.column(),
            "token"
        );
        Ok(token)
    }

    /// Lexes everything from the current position to the end of input.
    ///
    /// The returned tokens always end with exactly one EOF token.
    ///
    /// # Errors
    ///
    /// Aborts at the first malformed construct; no partial result is returned.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }
        debug!(count = tokens.len(), "tokenized source");
        Ok(tokens)
    }

    /// Rewinds to the start of the source.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.token_start = 0;
        self.token_start_line = 1;
        self.token_start_column = 1;
        self.finished = false;
    }

    /// Returns true once every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Line of the next unread character (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Column of the next unread character (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// The source being lexed.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds a token positioned at the start of the current token.
    pub(crate) fn make_token(&self, kind: TokenKind, text: impl Into<String>) -> Token {
        Token::new(kind, text, self.token_start_line, self.token_start_column)
    }

    /// The source text of the current token so far.
    pub(crate) fn token_text(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    /// An error at the cursor, i.e. at the offending character or at end of input.
    pub(crate) fn error_here(&self, kind: LexErrorKind, character: Option<char>) -> LexicalError {
        LexicalError::with_default_context(kind, character, self.cursor.line(), self.cursor.column())
    }

    /// An error at the first character of the current token.
    pub(crate) fn error_at_token_start(&self, kind: LexErrorKind, character: Option<char>) -> LexicalError {
        LexicalError::with_default_context(
            kind,
            character,
            self.token_start_line,
            self.token_start_column,
        )
    }
}

/// Letters and underscore start identifiers. ASCII only.
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Yields tokens up to, but not including, the EOF token.
///
/// After an error is yielded the iterator is exhausted.
impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
