//! Identifier and keyword lexing.

use super::core::is_ident_continue;
use crate::keywords::classify_word;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the longest run of letters, digits and underscores.
    ///
    /// The complete run is classified afterwards, so `iffy` is an identifier
    /// and never `if` followed by `fy`.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let text = self.token_text();
        self.make_token(classify_word(text), text)
    }
}
