//! Lexical errors.
//!
//! The lexer stops at the first malformed construct and returns a
//! [`LexicalError`] describing it. The error keeps every field separately so
//! that a caller can render it in the user's language with
//! [`LexicalError::localized`] instead of relying on the English `Display`.

use dreamc_i18n::{format_message, Translate};
use thiserror::Error;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    UnexpectedCharacter,
    /// A malformed two-character operator (a lone `&` or `|`).
    InvalidCharacter,
    /// End of input inside a string literal.
    UnterminatedString,
    /// A character literal without its closing quote.
    UnterminatedChar,
    /// End of input inside a block comment.
    UnterminatedComment,
    /// A backslash followed by an unknown escape or by end of input.
    InvalidEscape,
    /// An exponent marker without digits.
    InvalidNumber,
    /// A structural error with a free-form message.
    Custom(String),
}

impl LexErrorKind {
    /// The message key for this kind, also its English text.
    pub fn msgid(&self) -> &str {
        match self {
            LexErrorKind::UnexpectedCharacter => "Unexpected character",
            LexErrorKind::InvalidCharacter => "Invalid character",
            LexErrorKind::UnterminatedString => "Unterminated string",
            LexErrorKind::UnterminatedChar => "Unterminated character literal",
            LexErrorKind::UnterminatedComment => "Unterminated comment",
            LexErrorKind::InvalidEscape => "Invalid escape sequence",
            LexErrorKind::InvalidNumber => "Invalid number format",
            LexErrorKind::Custom(message) => message,
        }
    }

    /// The token-kind label the lexer attaches to this kind of error.
    pub fn default_context(&self) -> Option<&'static str> {
        match self {
            LexErrorKind::UnexpectedCharacter | LexErrorKind::InvalidCharacter => Some("UNKNOWN"),
            LexErrorKind::UnterminatedString => Some("STRING"),
            LexErrorKind::UnterminatedChar => Some("CHAR"),
            LexErrorKind::UnterminatedComment => Some("MULTI_COMMENT"),
            LexErrorKind::InvalidEscape => Some("ESCAPE"),
            LexErrorKind::InvalidNumber => Some("NUMBER"),
            LexErrorKind::Custom(_) => None,
        }
    }
}

/// A lexical error with its position.
///
/// # Example
///
/// ```
/// use dreamc_lex::{LexErrorKind, LexicalError};
///
/// let err = LexicalError::new(LexErrorKind::UnexpectedCharacter, Some('@'), "UNKNOWN", 1, 5);
/// assert_eq!(
///     err.to_string(),
///     "Unexpected character at line 1, column 5: unexpected character '@' (token type: UNKNOWN)"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "{} at line {line}, column {column}{}{}",
    .kind.msgid(),
    character_suffix(.character),
    context_suffix(.context)
)]
pub struct LexicalError {
    kind: LexErrorKind,
    character: Option<char>,
    context: Option<String>,
    line: u32,
    column: u32,
}

impl LexicalError {
    /// Creates a character-level error.
    ///
    /// # Arguments
    ///
    /// * `kind` - The error category
    /// * `character` - The offending character, if there is one
    /// * `context` - Token-kind label such as `"STRING"` or `"UNKNOWN"`
    /// * `line`, `column` - Where the error was detected (1-based)
    pub fn new(
        kind: LexErrorKind,
        character: Option<char>,
        context: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            kind,
            character,
            context: Some(context.into()),
            line,
            column,
        }
    }

    /// Creates a character-level error labelled with the kind's usual context.
    pub fn with_default_context(
        kind: LexErrorKind,
        character: Option<char>,
        line: u32,
        column: u32,
    ) -> Self {
        let context = kind.default_context().map(str::to_string);
        Self {
            kind,
            character,
            context,
            line,
            column,
        }
    }

    /// Creates a structural error that carries only a message and a position.
    pub fn structural(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind: LexErrorKind::Custom(message.into()),
            character: None,
            context: None,
            line,
            column,
        }
    }

    /// The error category.
    pub fn kind(&self) -> &LexErrorKind {
        &self.kind
    }

    /// The category's message key.
    pub fn message(&self) -> &str {
        self.kind.msgid()
    }

    /// The offending character.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// The token-kind label.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Line of the error (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the error (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Renders the error through `translator`.
    ///
    /// The layout is `<position>: <unexpected character 'c'> (<token type>: CTX) - <category>`,
    /// each piece translated separately. A category without a translation is
    /// shown as its English message key.
    pub fn localized(&self, translator: &impl Translate) -> String {
        let template = translator.translate("Lexical error at line %d, column %d");
        let mut out = format_message(&template, &[&self.line, &self.column]);

        if let Some(c) = self.character {
            out.push_str(&format!(
                ": {} '{}'",
                translator.translate("unexpected character"),
                printable(c)
            ));
        }

        if let Some(context) = &self.context {
            out.push_str(&format!(" ({}: {})", translator.translate("token type"), context));
        }

        out.push_str(" - ");
        out.push_str(&translator.translate(self.message()));
        out
    }
}

fn character_suffix(character: &Option<char>) -> String {
    match character {
        Some(c) => format!(": unexpected character '{}'", printable(*c)),
        None => String::new(),
    }
}

fn context_suffix(context: &Option<String>) -> String {
    match context {
        Some(context) => format!(" (token type: {context})"),
        None => String::new(),
    }
}

fn printable(c: char) -> String {
    if c.is_control() {
        c.escape_default().to_string()
    } else {
        c.to_string()
    }
}

/// Result type alias using LexicalError.
pub type Result<T> = std::result::Result<T, LexicalError>;
