//! Character cursor for traversing source code.
//!
//! The cursor walks a borrowed `&str` one `char` at a time and keeps the
//! line/column of the next unread character. Columns count characters, not
//! bytes, so multi-byte text inside literals does not skew diagnostics.

/// A cursor over source text.
///
/// # Example
///
/// ```
/// use dreamc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x");
/// assert_eq!(cursor.current_char(), Some('v'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('a'));
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

/// Saved cursor state, see [`Cursor::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSnapshot {
    position: usize,
    line: u32,
    column: u32,
}

impl CursorSnapshot {
    /// The state of a cursor that has not consumed anything.
    pub const START: CursorSnapshot = CursorSnapshot {
        position: 0,
        line: 1,
        column: 1,
    };
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: CursorSnapshot::START.position,
            line: CursorSnapshot::START.line,
            column: CursorSnapshot::START.column,
        }
    }

    /// Returns the next unread character, or `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;
        if b < 128 {
            return Some(b as char);
        }
        self.source[self.position..].chars().next()
    }

    /// Returns the character `offset` characters ahead without consuming anything.
    ///
    /// # Example
    ///
    /// ```
    /// use dreamc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("a*b");
    /// assert_eq!(cursor.peek_char(0), Some('a'));
    /// assert_eq!(cursor.peek_char(2), Some('b'));
    /// assert_eq!(cursor.peek_char(3), None);
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        if offset == 0 {
            return self.current_char();
        }
        self.source[self.position..].chars().nth(offset)
    }

    /// Returns true if the next unread character is `expected`.
    #[inline]
    pub fn check(&self, expected: char) -> bool {
        self.current_char() == Some(expected)
    }

    /// Consumes one character and returns it.
    ///
    /// A newline moves to column 1 of the next line; anything else advances
    /// the column by one. Returns `None` and does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current_char() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Consumes the next character if it is `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use dreamc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.check(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true once every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Line of the next unread character (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the next unread character (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source between byte offset `start` and the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Saves the current position.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns to a position saved with [`snapshot`](Self::snapshot).
    ///
    /// # Example
    ///
    /// ```
    /// use dreamc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab\ncd");
    /// let saved = cursor.snapshot();
    /// cursor.eat_while(|_| true);
    /// assert_eq!(cursor.line(), 2);
    /// cursor.restore(saved);
    /// assert_eq!((cursor.line(), cursor.column()), (1, 1));
    /// ```
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }

    /// Rewinds to the start of the source.
    pub fn reset(&mut self) {
        self.restore(CursorSnapshot::START);
    }
}
