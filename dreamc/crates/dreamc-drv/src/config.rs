//! Configuration for the dreamc driver.
//!
//! Settings live in a JSON file named `default.json` inside a `.config`
//! directory. The driver looks in the working directory first and then next
//! to the executable, writing a default file there when none exists.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{DriverError, Result};

/// Directory that holds configuration files.
pub const CONFIG_DIR: &str = ".config";

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "default.json";

/// Highest accepted `compiler.optimization_level`.
pub const MAX_OPTIMIZATION_LEVEL: u8 = 3;

/// The configuration a run starts with and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// The loaded settings.
    pub config: Config,
    /// The file they were read from.
    pub path: PathBuf,
    /// Whether `path` was written with defaults during this load.
    pub created: bool,
}

/// Driver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Language and locale settings.
    #[serde(default)]
    pub language: LanguageConfig,

    /// Compilation settings for later pipeline stages.
    #[serde(default)]
    pub compiler: CompilerConfig,

    /// Output presentation settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Locale selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Locale applied after the environment locale.
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Locale applied after `default_locale`.
    #[serde(default = "default_locale")]
    pub fallback_locale: String,

    /// Consult `LC_ALL`, `LC_MESSAGES` and `LANG` at startup.
    #[serde(default = "default_true")]
    pub auto_detect: bool,
}

/// Compiler settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Optimization level (0-3).
    #[serde(default = "default_optimization_level")]
    pub optimization_level: u8,

    /// Emit debug information.
    #[serde(default)]
    pub debug_info: bool,

    /// Treat warnings as errors.
    #[serde(default)]
    pub warnings_as_errors: bool,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Enable debug logging.
    #[serde(default)]
    pub verbose: bool,

    /// Log progress of each stage.
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Use ANSI colors in log output.
    #[serde(default = "default_true")]
    pub colored_output: bool,
}

fn default_locale() -> String {
    dreamc_i18n::DEFAULT_LOCALE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_optimization_level() -> u8 {
    2
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            fallback_locale: default_locale(),
            auto_detect: true,
        }
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            optimization_level: default_optimization_level(),
            debug_info: false,
            warnings_as_errors: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            show_progress: true,
            colored_output: true,
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// The file must exist, parse as JSON and pass [`Config::validate`].
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content).map_err(|e| {
            DriverError::Config(format!("Failed to parse configuration: {}", e))
        })?;
        config.validate()?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges that the JSON schema cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.compiler.optimization_level > MAX_OPTIMIZATION_LEVEL {
            return Err(DriverError::Validation(format!(
                "optimization_level must be between 0 and {}, got {}",
                MAX_OPTIMIZATION_LEVEL, self.compiler.optimization_level
            )));
        }
        if self.language.default_locale.trim().is_empty() {
            return Err(DriverError::Validation("default_locale must not be empty".to_string()));
        }
        if self.language.fallback_locale.trim().is_empty() {
            return Err(DriverError::Validation("fallback_locale must not be empty".to_string()));
        }
        Ok(())
    }

    /// `<dir>/.config/default.json`.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_DIR).join(CONFIG_FILE_NAME)
    }

    /// The configuration file kept next to the executable.
    pub fn executable_path(exe: &Path) -> PathBuf {
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Self::path_in(dir)
    }

    /// Load the startup configuration.
    ///
    /// Uses `<work_dir>/.config/default.json` when present. Otherwise the
    /// file next to `exe` is used, and written with defaults first if it
    /// does not exist yet. `created` reports that write so the caller can
    /// log it once logging is set up.
    pub fn load_default(work_dir: &Path, exe: &Path) -> Result<StartupConfig> {
        let local = Self::path_in(work_dir);
        if local.is_file() {
            let config = Self::load_from_path(&local)?;
            return Ok(StartupConfig {
                config,
                path: local,
                created: false,
            });
        }

        let path = Self::executable_path(exe);
        let created = !path.exists();
        if created {
            Self::default().save_to_path(&path)?;
        }
        let config = Self::load_from_path(&path)?;
        Ok(StartupConfig {
            config,
            path,
            created,
        })
    }

    /// Validate `source` and install it as `<work_dir>/.config/default.json`.
    ///
    /// The file is copied byte for byte.
    /// Returns the destination path.
    pub fn set_as_default(source: &Path, work_dir: &Path) -> Result<PathBuf> {
        Self::load_from_path(source)?;

        let destination = Self::path_in(work_dir);
        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(source, &destination)?;

        info!(
            from = %source.display(),
            to = %destination.display(),
            "installed default configuration"
        );
        Ok(destination)
    }
}
