// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for the `session` tool.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. session.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. REDSESSION_* env vars
//! 5. --set section.key=value
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! REDSESSION_GLOBAL__OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! REDSESSION_DISPLAY__JSON_PRETTY=true   → display.json_pretty = true
//! ```
//!
//! `__` separates the section from the key so keys keep their underscores.
//! Variables under the prefix that do not name a known section
//! (`REDSESSION_FOO`) are ignored.

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use wax::Program as _;

use crate::error::{ConfigError, Result};
use crate::logging::LogConfig;

use loader::ConfigLoader;
use types::{DisplayConfig, GlobalConfig};

/// Prefix of environment variables read by [`ConfigLoader::with_env_prefix`].
pub const ENV_PREFIX: &str = "REDSESSION";

/// Top-level sections of [`Config`].
pub const SECTIONS: &[&str] = &["global", "display"];

/// Configuration file picked up from the working directory.
pub const DEFAULT_INI: &str = "session.toml";

/// Marker printed in place of masked values.
pub const HIDDEN: &str = "[hidden]";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Output rendering.
    pub display: DisplayConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use red_session::config::{Config, ENV_PREFIX};
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("session.toml")
    ///     .with_env_prefix(ENV_PREFIX)
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        Self::builder().add_toml_file(path).build().map_err(|e| {
            ConfigError::ParseError {
                path: path.display().to_string(),
                message: format!("{e:#}"),
            }
            .into()
        })
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validates values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns an error if a `display.hide` pattern is not a valid glob.
    pub fn validate(&self) -> Result<()> {
        self.display.validate()?;
        Ok(())
    }

    /// Whether the value of `key` should be masked in output.
    #[must_use]
    pub fn is_hidden(&self, key: &str) -> bool {
        self.display.hide.iter().any(|pattern| {
            wax::Glob::new(pattern).is_ok_and(|glob| glob.is_match(key))
        })
    }

    /// `value`, or [`HIDDEN`] when `key` is masked.
    #[must_use]
    pub fn mask<'a>(&self, key: &str, value: &'a str) -> &'a str {
        if self.is_hidden(key) { HIDDEN } else { value }
    }

    /// Logging settings derived from `[global]`.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.global.output_log_level)
            .with_file_level(self.global.file_log_level)
            .maybe_with_log_file(
                self.global
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string()),
            )
            .with_json_file(self.global.log_json)
            .build()
    }

    /// Format configuration options for display.
    ///
    /// One aligned `key = value` line per option, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_display_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("global.log_json".into(), self.global.log_json.to_string());
    }

    fn format_display_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("display.hide".into(), self.display.hide.join(", "));
        options.insert(
            "display.json_pretty".into(),
            self.display.json_pretty.to_string(),
        );
    }
}
