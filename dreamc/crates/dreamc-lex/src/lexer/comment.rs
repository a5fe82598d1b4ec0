//! Comment lexing.
//!
//! This module handles skipping blanks, line comments and block comments.
//! Newlines are not blanks: they become LINEBREAK tokens.

use crate::error::{LexErrorKind, Result};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips spaces, tabs, carriage returns and comments.
    ///
    /// This is called before lexing each token.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        loop {
            match self.cursor.current_char() {
                Some(' ' | '\t' | '\r') => {
                    self.cursor.advance();
                },
                Some('/') => match self.cursor.peek_char(1) {
                    Some('/') => self.skip_line_comment(),
                    Some('*') => self.skip_block_comment()?,
                    _ => return Ok(()),
                },
                _ => return Ok(()),
            }
        }
    }

    /// Skips a line comment up to, not including, the newline.
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Skips a block comment. Block comments do not nest.
    fn skip_block_comment(&mut self) -> Result<()> {
        self.cursor.advance();
        self.cursor.advance();

        loop {
            match self.cursor.current_char() {
                None => return Err(self.error_here(LexErrorKind::UnterminatedComment, Some('*'))),
                Some('*') if self.cursor.peek_char(1) == Some('/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return Ok(());
                },
                Some(_) => {
                    self.cursor.advance();
                },
            }
        }
    }
}
