// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment command arguments.
//!
//! # Subcommands
//!
//! ```text
//! env get KEY                 → value, exit 1 if unset
//! env set KEY VALUE           → assign through the cache
//! env unset KEY               → erase
//! env list [--keys|--values]  → KEY=VALUE lines (or JSON)
//! env split [KEY] [-d CHAR]   → one path segment per line
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `env` command.
#[derive(Debug, Clone, Args)]
pub struct EnvArgs {
    /// Environment subcommand.
    #[command(subcommand)]
    pub subcommand: EnvSubcommand,
}

/// Environment subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum EnvSubcommand {
    /// Prints the value of a variable.
    Get(GetArgs),

    /// Sets a variable for this process.
    Set(SetArgs),

    /// Removes a variable from this process.
    Unset(UnsetArgs),

    /// Lists all variables.
    List(ListArgs),

    /// Splits a path-list variable into its segments.
    Split(SplitArgs),
}

#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Variable name.
    pub key: String,
}

#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Variable name.
    pub key: String,

    /// New value.
    pub value: String,
}

#[derive(Debug, Clone, Args)]
pub struct UnsetArgs {
    /// Variable name.
    pub key: String,
}

/// Arguments for the list subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Only print variable names.
    #[arg(long, conflicts_with = "values")]
    pub keys: bool,

    /// Only print values.
    #[arg(long)]
    pub values: bool,

    /// Print as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the split subcommand.
#[derive(Debug, Clone, Args)]
pub struct SplitArgs {
    /// Variable name.
    #[arg(default_value = "PATH")]
    pub key: String,

    /// Separator to split on instead of the platform's path separator.
    #[arg(short = 'd', long = "separator", value_name = "CHAR")]
    pub separator: Option<char>,
}
