// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use red_session::cli::env::EnvSubcommand;
use red_session::cli::global::GlobalOptions;
use red_session::cli::{Cli, Command};

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["session", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["session", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["session"]).unwrap();
    assert!(cli.command.is_none());
}

// =============================================================================
// Env Command
// =============================================================================

#[test]
fn cli_env_unset() {
    let cli = Cli::try_parse_from(["session", "env", "unset", "TMPDIR"]).unwrap();
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };
    assert!(matches!(args.subcommand, EnvSubcommand::Unset(ref unset) if unset.key == "TMPDIR"));
}

#[test]
fn cli_env_set_requires_value() {
    assert!(Cli::try_parse_from(["session", "env", "set", "KEY"]).is_err());
}

#[test]
fn cli_env_list_plain() {
    let cli = Cli::try_parse_from(["session", "env", "list"]).unwrap();
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };
    assert!(matches!(
        args.subcommand,
        EnvSubcommand::List(ref list) if !list.keys && !list.values && !list.json
    ));
}

#[test]
fn cli_unknown_subcommand() {
    assert!(Cli::try_parse_from(["session", "env", "frobnicate"]).is_err());
    assert!(Cli::try_parse_from(["session", "build"]).is_err());
}

// =============================================================================
// Args Command
// =============================================================================

#[test]
fn cli_args_json() {
    let cli = Cli::try_parse_from(["session", "args", "--json"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Args(ref args)) if args.json && args.at.is_none()));
}

#[test]
fn cli_args_at_rejects_negative() {
    assert!(Cli::try_parse_from(["session", "args", "--at", "-1"]).is_err());
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_unknown_flag_rejected() {
    assert!(Cli::try_parse_from(["session", "options", "--unknown"]).is_err());
}

#[test]
fn cli_global_overrides_only_set() {
    let global = GlobalOptions {
        options: vec!["display.json_pretty=true".to_string()],
        ..GlobalOptions::default()
    };
    assert_eq!(global.to_config_overrides(), ["display.json_pretty=true"]);
}

#[test]
fn cli_global_log_file_override() {
    let cli = Cli::try_parse_from(["session", "--log-file", "out/session.log", "inis"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Inis)));
    assert!(
        cli.global
            .to_config_overrides()
            .contains(&"global.log_file=out/session.log".to_string())
    );
}
