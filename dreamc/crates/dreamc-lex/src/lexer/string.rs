//! String and character literal lexing.
//!
//! Both literal forms share escape handling. The token text is the decoded
//! content without the surrounding quotes.

use crate::error::{LexErrorKind, Result};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Strings may span lines.
    ///
    /// # Errors
    ///
    /// Reaching end of input before the closing quote is an unterminated
    /// string error at the end-of-input position.
    pub(crate) fn lex_string(&mut self) -> Result<Token> {
        self.cursor.advance();

        let mut content = String::new();
        loop {
            match self.cursor.current_char() {
                None => return Err(self.error_here(LexErrorKind::UnterminatedString, Some('"'))),
                Some('"') => {
                    self.cursor.advance();
                    break;
                },
                Some('\\') => {
                    self.cursor.advance();
                    content.push(self.lex_escape()?);
                },
                Some(c) => {
                    content.push(c);
                    self.cursor.advance();
                },
            }
        }

        Ok(self.make_token(TokenKind::String, content))
    }

    /// Lexes a character literal: one character or escape, then `'`.
    ///
    /// # Errors
    ///
    /// An unterminated character literal error is reported where the closing
    /// quote was expected.
    pub(crate) fn lex_char(&mut self) -> Result<Token> {
        self.cursor.advance();

        let value = match self.cursor.current_char() {
            None => return Err(self.error_here(LexErrorKind::UnterminatedChar, Some('\''))),
            Some('\\') => {
                self.cursor.advance();
                self.lex_escape()?
            },
            Some(c) => {
                self.cursor.advance();
                c
            },
        };

        if !self.cursor.match_char('\'') {
            return Err(self.error_here(LexErrorKind::UnterminatedChar, Some('\'')));
        }

        Ok(self.make_token(TokenKind::Char, value.to_string()))
    }

    /// Decodes the character after a backslash.
    ///
    /// Supported escapes are `\n \t \r \b \f \\ \' \" \0`.
    fn lex_escape(&mut self) -> Result<char> {
        let Some(c) = self.cursor.current_char() else {
            return Err(self.error_here(LexErrorKind::InvalidEscape, Some('\\')));
        };

        let decoded = match c {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            'b' => '\u{8}',
            'f' => '\u{c}',
            '\\' => '\\',
            '\'' => '\'',
            '"' => '"',
            '0' => '\0',
            other => return Err(self.error_here(LexErrorKind::InvalidEscape, Some(other))),
        };
        self.cursor.advance();
        Ok(decoded)
    }
}
