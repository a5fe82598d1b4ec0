//! Locale selection and the localizer handed to diagnostic renderers.

use std::path::PathBuf;

use tracing::debug;

use crate::catalog::MessageCatalog;
use crate::translate::Translate;

/// Locale used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Environment variables consulted for the message locale, highest priority first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Picks the message locale from the environment.
///
/// The first non-empty variable of [`LOCALE_ENV_VARS`] wins and its encoding
/// suffix is removed (`zh_CN.UTF-8` becomes `zh_CN`). Falls back to
/// [`DEFAULT_LOCALE`].
///
/// # Arguments
///
/// * `lookup` - Reads one environment variable
///
/// # Example
///
/// ```
/// use dreamc_i18n::locale_from_env;
///
/// let locale = locale_from_env(|name| match name {
///     "LANG" => Some("zh_CN.UTF-8".to_string()),
///     _ => None,
/// });
/// assert_eq!(locale, "zh_CN");
/// ```
pub fn locale_from_env<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|&name| lookup(name))
        .find(|value| !value.is_empty())
        .map(|value| strip_encoding(&value).to_string())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Removes a `.encoding` suffix from a locale name.
pub fn strip_encoding(locale: &str) -> &str {
    locale.split_once('.').map_or(locale, |(name, _)| name)
}

/// Translates messages for one gettext domain.
///
/// Built once at startup and passed by reference to whatever renders
/// user-facing text. A localizer without a catalog returns every message
/// untranslated.
#[derive(Debug, Clone)]
pub struct Localizer {
    catalog: Option<MessageCatalog>,
}

impl Localizer {
    /// Creates a localizer for `domain` and selects the environment locale.
    ///
    /// If the environment locale has no catalog, `en_US` is tried instead.
    pub fn new(domain: &str, locale_dir: impl Into<PathBuf>) -> Self {
        let locale = locale_from_env(|name| std::env::var(name).ok());
        Self::with_locale(domain, locale_dir, &locale)
    }

    /// Creates a localizer for `domain` with an explicit starting locale.
    pub fn with_locale(domain: &str, locale_dir: impl Into<PathBuf>, locale: &str) -> Self {
        let mut localizer = Self {
            catalog: Some(MessageCatalog::new(domain, locale_dir)),
        };
        if !localizer.set_locale(locale) && locale != DEFAULT_LOCALE {
            localizer.set_locale(DEFAULT_LOCALE);
        }
        localizer
    }

    /// A localizer that never translates.
    pub fn disabled() -> Self {
        Self { catalog: None }
    }

    /// Switches locale. Returns `false` if no catalog exists for it.
    pub fn set_locale(&mut self, locale: &str) -> bool {
        match self.catalog.as_mut() {
            Some(catalog) => {
                let loaded = catalog.set_locale(locale);
                debug!(locale, loaded, "set message locale");
                loaded
            },
            None => false,
        }
    }

    /// The active locale, if a catalog has been loaded.
    pub fn locale(&self) -> Option<&str> {
        self.catalog
            .as_ref()
            .map(MessageCatalog::locale)
            .filter(|locale| *locale != "C")
    }

    /// Translates `msgid`.
    pub fn gettext(&self, msgid: &str) -> String {
        match &self.catalog {
            Some(catalog) => catalog.get_message(msgid).to_string(),
            None => msgid.to_string(),
        }
    }

    /// Translates a message with a plural form chosen by `n`.
    pub fn ngettext(&self, msgid: &str, msgid_plural: &str, n: u64) -> String {
        match &self.catalog {
            Some(catalog) => catalog.get_plural_message(msgid, msgid_plural, n).to_string(),
            None if n == 1 => msgid.to_string(),
            None => msgid_plural.to_string(),
        }
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::disabled()
    }
}

impl Translate for Localizer {
    fn translate(&self, msgid: &str) -> String {
        self.gettext(msgid)
    }

    fn translate_plural(&self, msgid: &str, msgid_plural: &str, n: u64) -> String {
        self.ngettext(msgid, msgid_plural, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::write_mo;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn install(dir: &Path, locale: &str, entries: &[(&str, &str)]) {
        let messages = dir.join(locale).join("LC_MESSAGES");
        fs::create_dir_all(&messages).unwrap();
        fs::write(messages.join("dreamlang.mo"), write_mo(entries)).unwrap();
    }

    fn env_of<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_locale_from_env_priority() {
        let vars = [("LANG", "de_DE.UTF-8"), ("LC_MESSAGES", "fr_FR"), ("LC_ALL", "zh_CN.UTF-8")];
        assert_eq!(locale_from_env(env_of(&vars)), "zh_CN");

        let vars = [("LANG", "de_DE.UTF-8"), ("LC_MESSAGES", "fr_FR")];
        assert_eq!(locale_from_env(env_of(&vars)), "fr_FR");

        let vars = [("LANG", "de_DE.UTF-8")];
        assert_eq!(locale_from_env(env_of(&vars)), "de_DE");
    }

    #[test]
    fn test_locale_from_env_skips_empty() {
        let vars = [("LC_ALL", ""), ("LANG", "ja_JP.eucJP")];
        assert_eq!(locale_from_env(env_of(&vars)), "ja_JP");
    }

    #[test]
    fn test_locale_from_env_default() {
        assert_eq!(locale_from_env(|_| None), DEFAULT_LOCALE);
    }

    #[test]
    fn test_strip_encoding() {
        assert_eq!(strip_encoding("zh_CN.UTF-8"), "zh_CN");
        assert_eq!(strip_encoding("en_US"), "en_US");
        assert_eq!(strip_encoding("C.UTF-8"), "C");
    }

    #[test]
    fn test_with_locale_translates() {
        let dir = TempDir::new().unwrap();
        install(dir.path(), "zh_CN", &[("Unterminated string", "未终止的字符串")]);

        let localizer = Localizer::with_locale("dreamlang", dir.path(), "zh_CN");
        assert_eq!(localizer.locale(), Some("zh_CN"));
        assert_eq!(localizer.gettext("Unterminated string"), "未终止的字符串");
        assert_eq!(localizer.translate("Unterminated string"), "未终止的字符串");
    }

    #[test]
    fn test_with_locale_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        install(dir.path(), "en_US", &[("token type", "token kind")]);

        let localizer = Localizer::with_locale("dreamlang", dir.path(), "xx_YY");
        assert_eq!(localizer.locale(), Some("en_US"));
        assert_eq!(localizer.gettext("token type"), "token kind");
    }

    #[test]
    fn test_without_any_catalog() {
        let dir = TempDir::new().unwrap();
        let localizer = Localizer::with_locale("dreamlang", dir.path(), "zh_CN");
        assert_eq!(localizer.locale(), None);
        assert_eq!(localizer.gettext("token type"), "token type");
    }

    #[test]
    fn test_disabled() {
        let mut localizer = Localizer::disabled();
        assert!(!localizer.set_locale("zh_CN"));
        assert_eq!(localizer.gettext("hello"), "hello");
        assert_eq!(localizer.ngettext("a token", "tokens", 1), "a token");
        assert_eq!(localizer.ngettext("a token", "tokens", 2), "tokens");
    }
}
