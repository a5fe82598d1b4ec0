//! GNU gettext message catalogs.
//!
//! Catalogs are the binary `.mo` files produced by `msgfmt`. They are looked
//! up under `<locale_dir>/<locale>/LC_MESSAGES/<domain>.mo`, falling back to
//! the bare language directory (`zh_CN` falls back to `zh`).
//!
//! The on-disk layout is a 28-byte header (magic, revision, entry count,
//! offset of the original-string table, offset of the translation table,
//! hash table size and offset) followed by two tables of `(length, offset)`
//! pairs. Both byte orders are accepted.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::{I18nError, Result};

/// Magic number of a catalog written in the reader's byte order.
pub const MO_MAGIC: u32 = 0x950412de;

/// Magic number of a catalog written in the opposite byte order.
pub const MO_MAGIC_SWAPPED: u32 = 0xde120495;

const HEADER_LEN: usize = 28;

/// Locale name used before any catalog has been loaded.
const C_LOCALE: &str = "C";

/// Translations for one domain in one locale.
///
/// # Example
///
/// ```no_run
/// use dreamc_i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("dreamlang", "/usr/share/locale");
/// if catalog.set_locale("zh_CN") {
///     println!("{}", catalog.get_message("Unexpected character"));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    domain: String,
    locale_dir: PathBuf,
    locale: String,
    messages: FxHashMap<String, String>,
}

impl MessageCatalog {
    /// Creates an empty catalog for `domain` rooted at `locale_dir`.
    ///
    /// No file is read until [`set_locale`](Self::set_locale) is called.
    pub fn new(domain: impl Into<String>, locale_dir: impl Into<PathBuf>) -> Self {
        Self {
            domain: domain.into(),
            locale_dir: locale_dir.into(),
            locale: C_LOCALE.to_string(),
            messages: FxHashMap::default(),
        }
    }

    /// Switches to `locale`, loading its catalog.
    ///
    /// Returns `false` if no usable catalog exists for the locale or its bare
    /// language. The previously loaded messages stay active in that case.
    pub fn set_locale(&mut self, locale: &str) -> bool {
        if locale == self.locale {
            return true;
        }

        match self.load(locale) {
            Some(messages) => {
                self.messages = messages;
                self.locale = locale.to_string();
                true
            },
            None => false,
        }
    }

    fn load(&self, locale: &str) -> Option<FxHashMap<String, String>> {
        for path in self.candidate_paths(locale) {
            match read_catalog(&path) {
                Ok(messages) => {
                    debug!(
                        path = %path.display(),
                        entries = messages.len(),
                        "loaded message catalog"
                    );
                    return Some(messages);
                },
                Err(I18nError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                    debug!(path = %path.display(), "no message catalog");
                },
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "ignoring unusable message catalog");
                },
            }
        }
        None
    }

    fn candidate_paths(&self, locale: &str) -> Vec<PathBuf> {
        let mut paths = vec![self.catalog_path(locale)];
        if let Some((language, _)) = locale.split_once('_') {
            paths.push(self.catalog_path(language));
        }
        paths
    }

    /// Returns where the catalog for `locale` is expected on disk.
    pub fn catalog_path(&self, locale: &str) -> PathBuf {
        self.locale_dir
            .join(locale)
            .join("LC_MESSAGES")
            .join(format!("{}.mo", self.domain))
    }

    /// Looks up `msgid`, returning it unchanged when no translation exists.
    pub fn get_message<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.messages.get(msgid).map(String::as_str).unwrap_or(msgid)
    }

    /// Looks up a message with a plural form.
    ///
    /// Plural entries are stored under the key `msgid\0msgid_plural` and their
    /// translation holds the forms separated by NUL. Chinese locales and
    /// `n == 1` select the first form, anything else selects the second. When
    /// the entry is missing the singular or plural msgid is looked up on its
    /// own instead.
    pub fn get_plural_message<'a>(&'a self, msgid: &'a str, msgid_plural: &'a str, n: u64) -> &'a str {
        let singular = n == 1 || self.locale.starts_with("zh");

        let key = format!("{msgid}\0{msgid_plural}");
        if let Some(translation) = self.messages.get(&key) {
            let mut forms = translation.split('\0');
            let first = forms.next();
            let chosen = if singular { first } else { forms.next().or(first) };
            if let Some(form) = chosen.filter(|form| !form.is_empty()) {
                return form;
            }
        }

        if singular {
            self.get_message(msgid)
        } else {
            self.get_message(msgid_plural)
        }
    }

    /// The active locale, `"C"` until a catalog has been loaded.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The gettext domain (catalog file stem).
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Number of translated entries.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if no translations are loaded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Reads and parses the catalog at `path`.
pub fn read_catalog(path: &Path) -> Result<FxHashMap<String, String>> {
    let bytes = std::fs::read(path)?;
    parse_mo(&bytes)
}

/// Parses the bytes of a `.mo` file into a msgid to translation map.
///
/// The header entry (empty msgid) is skipped. Every offset is bounds-checked,
/// so truncated or corrupt input yields an error rather than a panic.
pub fn parse_mo(bytes: &[u8]) -> Result<FxHashMap<String, String>> {
    let magic = bytes
        .get(0..4)
        .and_then(|b| b.try_into().ok())
        .map(u32::from_le_bytes)
        .ok_or(I18nError::Truncated("header"))?;

    let big_endian = match magic {
        MO_MAGIC => false,
        MO_MAGIC_SWAPPED => true,
        other => return Err(I18nError::BadMagic(other)),
    };
    let reader = MoReader { bytes, big_endian };

    let revision = reader.u32_at(4, "header")?;
    if revision != 0 {
        return Err(I18nError::UnsupportedRevision(revision));
    }

    let count = reader.u32_at(8, "header")? as usize;
    let originals = reader.u32_at(12, "header")? as usize;
    let translations = reader.u32_at(16, "header")? as usize;

    let mut messages = FxHashMap::default();
    for index in 0..count {
        let original = reader.string_at(table_entry(originals, index)?, index)?;
        let translation = reader.string_at(table_entry(translations, index)?, index)?;
        if !original.is_empty() {
            messages.insert(original, translation);
        }
    }

    Ok(messages)
}

/// Encodes `entries` as a little-endian `.mo` file without a hash table.
///
/// Entries are sorted by msgid as `msgfmt` does. Plural entries use the
/// `msgid\0msgid_plural` key with NUL-separated forms.
pub fn write_mo(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let count = sorted.len();
    let originals_at = HEADER_LEN;
    let translations_at = originals_at + count * 8;
    let strings_at = translations_at + count * 8;

    let mut pool = Vec::new();
    let mut table = |text: &str| {
        let entry = (text.len(), strings_at + pool.len());
        pool.extend_from_slice(text.as_bytes());
        pool.push(0);
        entry
    };
    let original_table: Vec<_> = sorted.iter().map(|(original, _)| table(original)).collect();
    let translation_table: Vec<_> = sorted.iter().map(|(_, translated)| table(translated)).collect();

    let mut out = Vec::with_capacity(strings_at + pool.len());
    for word in [
        MO_MAGIC,
        0,
        count as u32,
        originals_at as u32,
        translations_at as u32,
        0,
        strings_at as u32,
    ] {
        out.extend_from_slice(&word.to_le_bytes());
    }
    for (len, offset) in original_table.into_iter().chain(translation_table) {
        out.extend_from_slice(&(len as u32).to_le_bytes());
        out.extend_from_slice(&(offset as u32).to_le_bytes());
    }
    out.extend_from_slice(&pool);
    out
}

fn table_entry(table: usize, index: usize) -> Result<usize> {
    index
        .checked_mul(8)
        .and_then(|delta| table.checked_add(delta))
        .ok_or(I18nError::Truncated("string table"))
}

struct MoReader<'a> {
    bytes: &'a [u8],
    big_endian: bool,
}

impl MoReader<'_> {
    fn u32_at(&self, offset: usize, what: &'static str) -> Result<u32> {
        let word: [u8; 4] = offset
            .checked_add(4)
            .and_then(|end| self.bytes.get(offset..end))
            .and_then(|b| b.try_into().ok())
            .ok_or(I18nError::Truncated(what))?;

        Ok(if self.big_endian {
            u32::from_be_bytes(word)
        } else {
            u32::from_le_bytes(word)
        })
    }

    fn string_at(&self, descriptor: usize, index: usize) -> Result<String> {
        let len = self.u32_at(descriptor, "string table")? as usize;
        let offset = self.u32_at(descriptor + 4, "string table")? as usize;

        let raw = offset
            .checked_add(len)
            .and_then(|end| self.bytes.get(offset..end))
            .ok_or(I18nError::Truncated("string data"))?;

        String::from_utf8(raw.to_vec()).map_err(|_| I18nError::InvalidUtf8 { index })
    }
}
