// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment commands.
//!
//! ```text
//! run_env_command(args, config)
//!        |
//!        v
//!   environment()  (process-wide cache)
//!        |
//!        v
//! execute_env_command(args, config, cache, stdout)
//!   get   -> var(key)        -> masked value
//!   set   -> var(key).assign -> OS, then cache
//!   unset -> erase(key)
//!   list  -> entries()       -> text or JSON
//!   split -> var(key).split  -> one segment per line
//! ```

use std::io::Write;

use anyhow::bail;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::cli::env::{EnvArgs, EnvSubcommand, ListArgs, SplitArgs};
use crate::config::{Config, HIDDEN};
use crate::core::env::cache::EnvironmentCache;
use crate::core::env::environment;
use crate::core::env::split::SplitPath;
use crate::error::Result;
use crate::platform::EnvPrimitives;

/// Run an `env` subcommand against the process environment.
///
/// # Errors
///
/// Returns an error if the environment cannot be loaded, the variable is not
/// set (`get`), the OS rejects an assignment (`set`), or stdout fails.
pub fn run_env_command(args: &EnvArgs, config: &Config) -> Result<()> {
    let cache = environment()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_env_command(args, config, cache, &mut out)
}

/// Run an `env` subcommand against `cache`, writing to `out`.
///
/// # Errors
///
/// See [`run_env_command`].
pub fn execute_env_command<P, W>(
    args: &EnvArgs,
    config: &Config,
    cache: &EnvironmentCache<P>,
    out: &mut W,
) -> Result<()>
where
    P: EnvPrimitives,
    W: Write,
{
    match &args.subcommand {
        EnvSubcommand::Get(get) => {
            let var = cache.var(&get.key)?;
            let Some(value) = var.value() else {
                bail!("'{}' is not set", get.key);
            };
            writeln!(out, "{}", config.mask(&get.key, value))?;
        }
        EnvSubcommand::Set(set) => {
            cache.var(&set.key)?.assign(set.value.as_str())?;
            info!(key = %set.key, "variable set");
        }
        EnvSubcommand::Unset(unset) => {
            cache.erase(&unset.key);
            info!(key = %unset.key, "variable removed");
        }
        EnvSubcommand::List(list) => write_list(list, config, cache, out)?,
        EnvSubcommand::Split(split) => write_split(split, config, cache, out)?,
    }
    Ok(())
}

fn write_list<P: EnvPrimitives, W: Write>(
    args: &ListArgs,
    config: &Config,
    cache: &EnvironmentCache<P>,
    out: &mut W,
) -> Result<()> {
    let entries: Vec<_> = cache.entries().collect();
    debug!(count = entries.len(), "listing environment");

    let masked = entries
        .iter()
        .map(|entry| (entry.key(), config.mask(entry.key(), entry.value())));

    if args.json {
        let value = if args.keys {
            Value::from_iter(masked.map(|(key, _)| key))
        } else if args.values {
            Value::from_iter(masked.map(|(_, value)| value))
        } else {
            Value::Object(
                masked
                    .map(|(key, value)| (key.to_owned(), Value::from(value)))
                    .collect::<Map<_, _>>(),
            )
        };

        if config.display.json_pretty {
            serde_json::to_writer_pretty(&mut *out, &value)?;
        } else {
            serde_json::to_writer(&mut *out, &value)?;
        }
        writeln!(out)?;
        return Ok(());
    }

    for (key, value) in masked {
        if args.keys {
            writeln!(out, "{key}")?;
        } else if args.values {
            writeln!(out, "{value}")?;
        } else {
            writeln!(out, "{key}={value}")?;
        }
    }
    Ok(())
}

fn write_split<P: EnvPrimitives, W: Write>(
    args: &SplitArgs,
    config: &Config,
    cache: &EnvironmentCache<P>,
    out: &mut W,
) -> Result<()> {
    let var = cache.var(&args.key)?;
    if var.is_set() && config.is_hidden(&args.key) {
        writeln!(out, "{HIDDEN}")?;
        return Ok(());
    }

    let split = match args.separator {
        Some(separator) => SplitPath::with_separator(var.value().unwrap_or_default(), separator),
        None => var.split(),
    };

    for segment in &split {
        writeln!(out, "{segment}")?;
    }
    Ok(())
}
