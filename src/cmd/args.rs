// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `args` command.

use std::io::Write;

use crate::cli::args::ArgsArgs;
use crate::config::Config;
use crate::core::args::{Arguments, arguments};
use crate::error::Result;

/// Print the arguments captured at startup.
///
/// # Errors
///
/// Returns an error if arguments were never captured, `--at` is out of
/// range, or stdout fails.
pub fn run_args_command(args: &ArgsArgs, config: &Config) -> Result<()> {
    let captured = arguments()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_args_command(args, config, captured, &mut out)
}

/// Print `captured` to `out`.
///
/// # Errors
///
/// See [`run_args_command`].
pub fn execute_args_command<W: Write>(
    args: &ArgsArgs,
    config: &Config,
    captured: &Arguments,
    out: &mut W,
) -> Result<()> {
    if let Some(index) = args.at {
        writeln!(out, "{}", captured.at(index)?)?;
        return Ok(());
    }

    if args.json {
        let list: Vec<&str> = captured.iter().collect();
        if config.display.json_pretty {
            serde_json::to_writer_pretty(&mut *out, &list)?;
        } else {
            serde_json::to_writer(&mut *out, &list)?;
        }
        writeln!(out)?;
        return Ok(());
    }

    for (index, arg) in captured.iter().enumerate() {
        writeln!(out, "{index}: {arg}")?;
    }
    Ok(())
}
