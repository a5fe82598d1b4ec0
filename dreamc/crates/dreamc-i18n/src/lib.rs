//! dreamc-i18n - Message localization for the DreamLang toolchain
//!
//! Diagnostics are written in English and translated at render time through
//! GNU gettext `.mo` catalogs. Nothing here is global: the driver builds one
//! [`Localizer`] at startup and passes it to the code that prints messages.
//!
//! # Example
//!
//! ```no_run
//! use dreamc_i18n::{format_message, Localizer, Translate};
//!
//! let localizer = Localizer::with_locale("dreamlang", "/usr/share/locale", "zh_CN");
//! let template = localizer.translate("Lexical error at line %d, column %d");
//! println!("{}", format_message(&template, &[&1, &7]));
//! ```
//!
//! # Module Structure
//!
//! - [`catalog`] - `.mo` parsing and per-locale message tables
//! - [`locale`] - environment locale detection and the [`Localizer`]
//! - [`translate`] - the [`Translate`] trait
//! - [`format`] - `%d`/`%s` placeholder substitution

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod format;
pub mod locale;
pub mod translate;

pub use catalog::{parse_mo, read_catalog, write_mo, MessageCatalog};
pub use error::{I18nError, Result};
pub use format::format_message;
pub use locale::{locale_from_env, strip_encoding, Localizer, DEFAULT_LOCALE};
pub use translate::{Translate, Untranslated};

/// The gettext domain of DreamLang's own messages.
pub const DOMAIN: &str = "dreamlang";
