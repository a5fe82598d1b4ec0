//! dreamc-drv - Compiler Driver
//!
//! Coordinates the DreamLang front end for the `dreamc` command: locating
//! the source file, loading configuration, choosing the message locale and
//! reporting lexer results.
//!
//! # Locale selection
//!
//! The message locale is chosen in this order, each later step overriding
//! the earlier ones when its catalog exists:
//!
//! 1. the environment (`LC_ALL`, `LC_MESSAGES`, `LANG`) when
//!    `language.auto_detect` is set
//! 2. `language.default_locale`, or `language.fallback_locale` if the
//!    default has no catalog
//! 3. the `--locale` option
//!
//! Catalogs are read from `<locale_dir>/<locale>/LC_MESSAGES/dreamlang.mo`.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod session;
pub mod source;

use std::path::{Path, PathBuf};

use dreamc_i18n::{Localizer, DEFAULT_LOCALE, DOMAIN};
use tracing::debug;

pub use config::{Config, StartupConfig};
pub use error::{DriverError, Result};
pub use session::{RunOptions, Session};
pub use source::{read_source, resolve_source, SOURCE_EXTENSION};

/// `<exe_dir>/../share/locale`.
pub fn default_locale_dir(exe: &Path) -> PathBuf {
    exe.parent()
        .unwrap_or_else(|| Path::new("."))
        .join("..")
        .join("share")
        .join("locale")
}

/// Builds the startup localizer for `config`.
pub fn startup_localizer(locale_dir: &Path, config: &Config) -> Localizer {
    let mut localizer = if config.language.auto_detect {
        Localizer::new(DOMAIN, locale_dir)
    } else {
        Localizer::with_locale(DOMAIN, locale_dir, DEFAULT_LOCALE)
    };
    apply_config_locale(&mut localizer, config);
    localizer
}

/// Switches to the configured locale. Returns `false` when neither the
/// default nor the fallback locale has a catalog, leaving `localizer`
/// unchanged.
pub fn apply_config_locale(localizer: &mut Localizer, config: &Config) -> bool {
    let language = &config.language;
    if localizer.set_locale(&language.default_locale) {
        return true;
    }
    debug!(locale = %language.default_locale, "no catalog for configured locale");

    if language.fallback_locale != language.default_locale
        && localizer.set_locale(&language.fallback_locale)
    {
        return true;
    }
    debug!(locale = %language.fallback_locale, "no catalog for fallback locale");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use dreamc_i18n::write_mo;
    use tempfile::TempDir;

    fn install_catalog(dir: &Path, locale: &str, entries: &[(&str, &str)]) {
        let messages = dir.join(locale).join("LC_MESSAGES");
        std::fs::create_dir_all(&messages).unwrap();
        std::fs::write(messages.join(format!("{DOMAIN}.mo")), write_mo(entries)).unwrap();
    }

    #[test]
    fn test_default_locale_dir() {
        let dir = default_locale_dir(Path::new("/usr/local/bin/dreamc"));
        assert_eq!(dir, PathBuf::from("/usr/local/bin/../share/locale"));
    }

    #[test]
    fn test_config_locale_selected() {
        let dir = TempDir::new().unwrap();
        install_catalog(dir.path(), "zh_CN", &[("Error", "错误")]);

        let mut config = Config::default();
        config.language.auto_detect = false;
        config.language.default_locale = "zh_CN".to_string();

        let localizer = startup_localizer(dir.path(), &config);
        assert_eq!(localizer.locale(), Some("zh_CN"));
        assert_eq!(localizer.gettext("Error"), "错误");
    }

    #[test]
    fn test_fallback_locale_used_when_default_missing() {
        let dir = TempDir::new().unwrap();
        install_catalog(dir.path(), "zh_CN", &[("Error", "错误")]);

        let mut config = Config::default();
        config.language.default_locale = "fr_FR".to_string();
        config.language.fallback_locale = "zh_CN".to_string();

        let mut localizer = Localizer::disabled();
        assert!(!apply_config_locale(&mut localizer, &config));

        let mut localizer = Localizer::with_locale(DOMAIN, dir.path(), "C");
        assert!(apply_config_locale(&mut localizer, &config));
        assert_eq!(localizer.locale(), Some("zh_CN"));
    }

    #[test]
    fn test_no_catalogs_leaves_messages_untranslated() {
        let dir = TempDir::new().unwrap();
        let localizer = startup_localizer(dir.path(), &Config::default());
        assert_eq!(localizer.locale(), None);
        assert_eq!(localizer.gettext("Error"), "Error");
    }
}
