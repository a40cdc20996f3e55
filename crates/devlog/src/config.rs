//! Configuration types for devlog.
//!
//! [`AppConfig`] implements [`serde::Deserialize`] with every field
//! defaulted, so an empty configuration file is valid.
//!
//! # Example
//!
//! ```
//! # use devlog::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.file_name(), "devlog.md");
//! assert_eq!(config.prompt(), "> ");
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::clock::TimestampFormat;

/// Name of the log file, in both the global and the local directory.
pub const DEFAULT_FILE_NAME: &str = "devlog.md";

/// Prompt printed before each line of interactive input.
pub const DEFAULT_PROMPT: &str = "> ";

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Log file name.
    file_name: String,

    /// Directory of the global log; `~/devlog` when unset.
    global_dir: Option<PathBuf>,

    /// Locale for entry timestamps; taken from the environment when unset.
    locale: Option<String>,

    /// Interactive input prompt.
    prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            global_dir: None,
            locale: None,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl AppConfig {
    /// Returns the log file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the configured global log directory, if any.
    pub fn global_dir(&self) -> Option<&Path> {
        self.global_dir.as_deref()
    }

    /// Returns the configured locale name, if any.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Returns the interactive prompt.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Sets the log file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Sets the global log directory.
    pub fn with_global_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_dir = Some(dir.into());
        self
    }

    /// Sets the timestamp locale name.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the interactive prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Validates values that deserialization alone cannot check.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.file_name.trim().is_empty() {
            return Err("file_name must not be empty".to_string());
        }
        if Path::new(&self.file_name).components().count() != 1 {
            return Err(format!(
                "file_name must be a plain file name, got {:?}",
                self.file_name
            ));
        }
        match &self.locale {
            Some(locale) if TimestampFormat::from_name(locale).is_none() => {
                Err(format!("Unknown locale: {locale}"))
            }
            _ => Ok(()),
        }
    }

    /// Returns the timestamp format for new entries.
    ///
    /// A configured locale wins; otherwise the locale comes from the
    /// environment.
    pub fn timestamp_format(&self) -> TimestampFormat {
        self.locale
            .as_deref()
            .and_then(TimestampFormat::from_name)
            .unwrap_or_else(TimestampFormat::from_env)
    }
}
