//! Number literal lexing.
//!
//! Numbers are decimal with an optional fraction and exponent:
//! `42`, `3.14`, `6.02e23`, `1E-9`. The text is kept as written; converting
//! it to a value is left to later stages.

use crate::error::{LexErrorKind, Result};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// A `.` is only part of the number when a digit follows it, so `3.`
    /// lexes as NUMBER `3` then DOT.
    ///
    /// # Errors
    ///
    /// An exponent marker must be followed by at least one digit (after an
    /// optional sign); otherwise the error points at whatever came instead.
    pub(crate) fn lex_number(&mut self) -> Result<Token> {
        self.eat_digits();

        if self.cursor.check('.') && self.cursor.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
            self.eat_digits();
        }

        if matches!(self.cursor.current_char(), Some('e' | 'E')) {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), Some('+' | '-')) {
                self.cursor.advance();
            }
            match self.cursor.current_char() {
                Some(c) if c.is_ascii_digit() => self.eat_digits(),
                other => return Err(self.error_here(LexErrorKind::InvalidNumber, other)),
            }
        }

        Ok(self.make_token(TokenKind::Number, self.token_text()))
    }

    fn eat_digits(&mut self) {
        self.cursor.eat_while(|c| c.is_ascii_digit());
    }
}
