//! Token stream export.
//!
//! Tokens are exported as records of `line`, `type` and `value`, in input
//! order, with keys sorted by name. Columns are not part of the format. Two
//! encodings exist:
//!
//! - JSON: an array of objects, indented with four spaces.
//! - TOML: an array of tables under the `tokens` key.
//!
//! Both are deterministic, so exported files can be compared byte for byte.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::token::{Token, TokenKind};

/// Errors from encoding or decoding exported tokens.
#[derive(Error, Debug)]
pub enum SerializeError {
    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML encoding failed.
    #[error("TOML encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    /// TOML decoding failed.
    #[error("TOML decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),

    /// The requested format name is not known.
    #[error("unknown export format '{0}' (expected json or toml)")]
    UnknownFormat(String),
}

/// Result type alias using SerializeError.
pub type Result<T> = std::result::Result<T, SerializeError>;

/// Export encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Array of records.
    Json,
    /// `[[tokens]]` tables.
    Toml,
}

impl Format {
    /// Lowercase name, also the usual file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = SerializeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            _ => Err(SerializeError::UnknownFormat(s.to_string())),
        }
    }
}

/// One exported token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Source line.
    pub line: u32,

    /// Token kind, written as its wire name.
    #[serde(rename = "type")]
    pub kind: TokenKind,

    /// Token text.
    #[serde(rename = "value")]
    pub text: String,
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        Self {
            line: token.line(),
            kind: token.kind(),
            text: token.text().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct TokenTable {
    tokens: Vec<TokenRecord>,
}

/// Encodes `tokens` in `format`.
///
/// # Example
///
/// ```
/// use dreamc_lex::serialize::{serialize, Format};
/// use dreamc_lex::Lexer;
///
/// let tokens = Lexer::new("x").tokenize().unwrap();
/// let json = serialize(&tokens, Format::Json).unwrap();
/// assert!(json.contains("\"type\": \"IDENT\""));
/// ```
pub fn serialize(tokens: &[Token], format: Format) -> Result<String> {
    let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from).collect();
    match format {
        Format::Json => to_json(&records),
        Format::Toml => to_toml(records),
    }
}

/// Decodes records produced by [`serialize`].
pub fn deserialize(text: &str, format: Format) -> Result<Vec<TokenRecord>> {
    match format {
        Format::Json => Ok(serde_json::from_str(text)?),
        Format::Toml => {
            let table: TokenTable = toml::from_str(text)?;
            Ok(table.tokens)
        },
    }
}

fn to_json(records: &[TokenRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn to_toml(records: Vec<TokenRecord>) -> Result<String> {
    Ok(toml::to_string(&TokenTable { tokens: records })?)
}
