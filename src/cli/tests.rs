// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::env::EnvSubcommand;
use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["session", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "session",
        "-l",
        "5",
        "--ini",
        "a.toml",
        "-i",
        "b.toml",
        "-s",
        "display.json_pretty=true",
        "--no-default-inis",
        "options",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.inis.len(), 2);
    assert!(cli.global.no_default_inis);
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "display.json_pretty=true",
        "global.output_log_level=5",
        "global.file_log_level=5",
    ]
    "#);
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["session", "-l", "6", "version"]).is_err());
}

#[test]
fn test_parse_env_get() {
    let cli = Cli::try_parse_from(["session", "env", "get", "HOME"]).unwrap();
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };
    assert!(matches!(args.subcommand, EnvSubcommand::Get(ref get) if get.key == "HOME"));
}

#[test]
fn test_parse_env_set() {
    let cli = Cli::try_parse_from(["session", "env", "set", "EDITOR", "vi"]).unwrap();
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };
    let EnvSubcommand::Set(set) = args.subcommand else {
        panic!("expected set");
    };
    assert_eq!((set.key.as_str(), set.value.as_str()), ("EDITOR", "vi"));
}

#[test]
fn test_parse_env_list_flags_conflict() {
    assert!(Cli::try_parse_from(["session", "env", "list", "--keys", "--values"]).is_err());

    let cli = Cli::try_parse_from(["session", "env", "list", "--keys", "--json"]).unwrap();
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };
    let EnvSubcommand::List(list) = args.subcommand else {
        panic!("expected list");
    };
    assert!(list.keys && list.json && !list.values);
}

#[test]
fn test_parse_env_split_defaults_to_path() {
    let cli = Cli::try_parse_from(["session", "env", "split"]).unwrap();
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };
    let EnvSubcommand::Split(split) = args.subcommand else {
        panic!("expected split");
    };
    assert_eq!(split.key, "PATH");
    assert_eq!(split.separator, None);

    let cli = Cli::try_parse_from(["session", "env", "split", "LIST", "-d", ","]).unwrap();
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };
    assert!(matches!(
        args.subcommand,
        EnvSubcommand::Split(ref split) if split.key == "LIST" && split.separator == Some(',')
    ));
}

#[test]
fn test_parse_args_at() {
    let cli = Cli::try_parse_from(["session", "args", "--at", "1"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Args(ref args)) if args.at == Some(1)));
}

#[test]
fn test_file_log_level_falls_back_to_log_level() {
    let cli = Cli::try_parse_from(["session", "--log-level", "3", "--file-log-level", "5"])
        .unwrap();
    assert!(cli.command.is_none());
    assert_eq!(
        cli.global.to_config_overrides(),
        ["global.output_log_level=3", "global.file_log_level=5"]
    );
}
