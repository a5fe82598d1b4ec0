//! Locating and reading DreamLang source files.

use std::path::{Path, PathBuf};

use crate::error::{DriverError, Result};

/// Extension of DreamLang source files.
pub const SOURCE_EXTENSION: &str = "zv";

/// Resolves the file named on the command line.
///
/// A name with an extension is used as given. Otherwise `<name>.zv` is
/// preferred when that file exists, and the bare name is kept when it does
/// not.
pub fn resolve_source(name: &Path) -> PathBuf {
    if name.extension().is_some() {
        return name.to_path_buf();
    }

    let candidate = name.with_extension(SOURCE_EXTENSION);
    if candidate.is_file() {
        candidate
    } else {
        name.to_path_buf()
    }
}

/// Reads the whole file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| DriverError::Open {
        path: path.to_path_buf(),
        source,
    })
}
