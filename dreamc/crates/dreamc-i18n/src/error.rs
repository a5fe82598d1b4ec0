//! Errors raised while loading message catalogs.

use thiserror::Error;

/// Error type for catalog loading.
///
/// A missing catalog is not an error: lookups simply fall back to the
/// untranslated message. These variants describe catalogs that exist but
/// cannot be used.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Reading the catalog file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file does not start with a GNU message catalog magic number.
    #[error("not a message catalog (magic {0:#010x})")]
    BadMagic(u32),

    /// The catalog uses a format revision this reader does not understand.
    #[error("unsupported catalog revision {0}")]
    UnsupportedRevision(u32),

    /// A header field, table entry or string points past the end of the file.
    #[error("truncated catalog: {0}")]
    Truncated(&'static str),

    /// A message in the catalog is not valid UTF-8.
    #[error("catalog entry {index} is not valid UTF-8")]
    InvalidUtf8 {
        /// Position of the entry in the catalog tables.
        index: usize,
    },
}

/// Result type alias using I18nError.
pub type Result<T> = std::result::Result<T, I18nError>;
