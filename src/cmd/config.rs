// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands.

use crate::cli::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::{Config, DEFAULT_INI, ENV_PREFIX};
use crate::error::Result;

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display loaded configuration files.
pub fn run_inis_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}

/// Assembles the loader for the global options, without overrides.
#[must_use]
pub fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_INI);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

/// Loads the effective configuration: files, environment, then CLI overrides.
///
/// # Errors
///
/// Returns an error if a required `--ini` file is missing or invalid, or an
/// override is malformed.
pub fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global)
        .apply_overrides(&global.to_config_overrides())?
        .build()
}
