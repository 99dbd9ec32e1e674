// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `args` command.

use clap::Args;

/// Arguments for the `args` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ArgsArgs {
    /// Print only the argument at this index (checked).
    #[arg(long = "at", value_name = "N")]
    pub at: Option<usize>,

    /// Print as JSON.
    #[arg(long)]
    pub json: bool,
}
