// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! session [global options] <command>
//! version
//! options
//! inis
//! env {get|set|unset|list|split}
//! args [--at N]
//! ```

pub mod args;
pub mod env;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::args::ArgsArgs;
use crate::cli::env::EnvArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Process session environment tool.
#[derive(Debug, Parser)]
#[command(
    name = "session",
    author,
    version,
    about = "Process Session Environment",
    long_about = "red-session Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads and edits this process's environment through a cache\n\
                  that reconciles with the OS on every lookup, and prints the\n\
                  arguments captured at startup.",
    after_help = "CONFIG FILES:\n\n\
                  By default, session loads `session.toml` from the current\n\
                  directory if it exists. Additional files can be specified with\n\
                  --ini and are loaded in order after it. REDSESSION_SECTION__KEY\n\
                  environment variables and --set come last. Use --no-default-inis\n\
                  to skip `session.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Inis,

    /// Reads and edits environment variables.
    Env(EnvArgs),

    /// Prints the captured process arguments.
    Args(ArgsArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
