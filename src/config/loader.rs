// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional(session.toml)
//!   .add_toml_file(--ini)
//!   .with_env_prefix(REDSESSION)
//!   .apply_overrides(--set)
//!        |
//!        v
//!    build() --> Config (validated)
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, warn};

use super::{Config, SECTIONS};
use crate::error::{ConfigError, Result};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables at build time.
    ///
    /// Only sections listed in [`SECTIONS`] are read; an unknown key inside
    /// a known section is still an error.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("invalid override for '{key}'"))?;
        Ok(self)
    }

    /// Applies `section.key=value` overrides in order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an entry without `=` or with an
    /// empty key.
    pub fn apply_overrides<S: AsRef<str>>(self, overrides: &[S]) -> Result<Self> {
        overrides.iter().try_fold(self, |loader, entry| {
            let entry = entry.as_ref();
            let (key, value) = parse_override(entry)?;
            loader.set(key, value)
        })
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    /// - A `display.hide` pattern is not a valid glob.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(section_vars(prefix))),
            ),
            None => self.builder,
        };
        let cfg = builder.build()?;
        let config: Config = cfg.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects `<PREFIX>_<SECTION>__*` variables for the known sections.
fn section_vars(prefix: &str) -> config::Map<String, String> {
    let head = format!("{prefix}_").to_lowercase();
    let mut vars = config::Map::new();

    for (key, value) in std::env::vars_os() {
        let Some(key) = key.to_str() else {
            continue;
        };
        let lower = key.to_lowercase();
        let Some(rest) = lower.strip_prefix(&head) else {
            continue;
        };

        let known = SECTIONS.iter().any(|section| {
            rest.strip_prefix(section)
                .is_some_and(|tail| tail.starts_with("__"))
        });
        if !known {
            debug!(key, "ignoring variable outside the config sections");
            continue;
        }

        match value.into_string() {
            Ok(value) => {
                vars.insert(key.to_owned(), value);
            }
            Err(_) => warn!(key, "ignoring config variable that is not valid unicode"),
        }
    }

    vars
}

/// Splits `section.key=value` at the first `=`.
pub(crate) fn parse_override(entry: &str) -> std::result::Result<(&str, &str), ConfigError> {
    match entry.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(ConfigError::InvalidValue {
            section: "cli".to_string(),
            key: "set".to_string(),
            message: format!("expected 'section.key=value', got '{entry}'"),
        }),
    }
}
