//! Operator and punctuation lexing.
//!
//! Operators use longest match with one character of lookahead. `&` and `|`
//! exist only doubled; there are no bitwise operators.

use crate::error::{LexErrorKind, Result};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the operator or punctuation starting with `c`.
    ///
    /// # Errors
    ///
    /// A lone `&` or `|` is an invalid character; any character that starts
    /// no token is an unexpected character. Both point at `c`.
    pub(crate) fn lex_operator(&mut self, c: char) -> Result<Token> {
        let kind = match c {
            '=' => self.lex_pair('=', TokenKind::Equal, TokenKind::Assign),
            '!' => self.lex_pair('=', TokenKind::NotEqual, TokenKind::LogicalNot),
            '<' => self.lex_pair('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.lex_pair('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '*' => self.lex_pair('*', TokenKind::Power, TokenKind::Mult),
            '&' => self.lex_doubled('&', TokenKind::LogicalAnd)?,
            '|' => self.lex_doubled('|', TokenKind::LogicalOr)?,
            _ => {
                let kind = single_char_kind(c)
                    .ok_or_else(|| self.error_here(LexErrorKind::UnexpectedCharacter, Some(c)))?;
                self.cursor.advance();
                kind
            },
        };

        Ok(self.make_token(kind, self.token_text()))
    }

    /// Consumes `c` and, if `second` follows, that too.
    fn lex_pair(&mut self, second: char, double: TokenKind, single: TokenKind) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char(second) {
            double
        } else {
            single
        }
    }

    /// Consumes an operator that is only valid as two copies of `c`.
    fn lex_doubled(&mut self, c: char, kind: TokenKind) -> Result<TokenKind> {
        self.cursor.advance();
        if self.cursor.match_char(c) {
            Ok(kind)
        } else {
            Err(self.error_at_token_start(LexErrorKind::InvalidCharacter, Some(c)))
        }
    }
}

fn single_char_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '/' => TokenKind::Divide,
        '%' => TokenKind::Modulo,
        '.' => TokenKind::Dot,
        ',' => TokenKind::Comma,
        ':' => TokenKind::Colon,
        ';' => TokenKind::Semicolon,
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        _ => return None,
    };
    Some(kind)
}
