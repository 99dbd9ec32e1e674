// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! Config
//!   [global]   output_log_level, file_log_level, log_file, log_json
//!   [display]  hide (globs), json_pretty
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    pub log_file: Option<PathBuf>,
    /// Write the log file as JSON lines.
    pub log_json: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::DEBUG,
            log_file: None,
            log_json: false,
        }
    }
}

/// How `env` output is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Glob patterns of variable names whose values are masked.
    pub hide: Vec<String>,
    /// Pretty-print `--json` output.
    pub json_pretty: bool,
}

impl DisplayConfig {
    /// Checks that every `hide` pattern is a valid glob.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for pattern in &self.hide {
            wax::Glob::new(pattern).map_err(|e| ConfigError::InvalidValue {
                section: "display".to_string(),
                key: "hide".to_string(),
                message: format!("invalid glob '{pattern}': {e}"),
            })?;
        }
        Ok(())
    }
}
