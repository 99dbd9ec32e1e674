// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::args::ArgsArgs;
use crate::cli::env::{EnvArgs, EnvSubcommand, GetArgs, ListArgs, SetArgs, SplitArgs, UnsetArgs};
use crate::cmd::args::execute_args_command;
use crate::cmd::env::execute_env_command;
use crate::config::Config;
use crate::core::args::Arguments;
use crate::core::env::cache::EnvironmentCache;
use crate::platform::{EnvPrimitives, MemoryEnv};

fn run(
    subcommand: EnvSubcommand,
    config: &Config,
    cache: &EnvironmentCache<&MemoryEnv>,
) -> anyhow::Result<String> {
    let mut out = Vec::new();
    execute_env_command(&EnvArgs { subcommand }, config, cache, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

fn sample() -> MemoryEnv {
    MemoryEnv::from_pairs([
        ("HOME", "/home/user"),
        ("API_TOKEN", "secret"),
        ("LIST", "a,b,,c"),
    ])
}

fn hiding_tokens() -> Config {
    Config::parse("[display]\nhide = [\"*TOKEN*\"]").unwrap()
}

#[test]
fn test_env_get_masks_hidden() {
    let env = sample();
    let cache = EnvironmentCache::new(&env).unwrap();
    let config = hiding_tokens();

    let get = |key: &str| {
        run(
            EnvSubcommand::Get(GetArgs { key: key.into() }),
            &config,
            &cache,
        )
    };

    assert_eq!(get("HOME").unwrap(), "/home/user\n");
    assert_eq!(get("API_TOKEN").unwrap(), "[hidden]\n");
    insta::assert_snapshot!(get("MISSING").unwrap_err().to_string(), @"'MISSING' is not set");
}

#[test]
fn test_env_set_and_unset_reach_primitives() {
    let env = sample();
    let cache = EnvironmentCache::new(&env).unwrap();
    let config = Config::default();

    run(
        EnvSubcommand::Set(SetArgs {
            key: "EDITOR".into(),
            value: "vi".into(),
        }),
        &config,
        &cache,
    )
    .unwrap();
    assert_eq!(env.get("EDITOR").unwrap().as_deref(), Some("vi"));

    run(
        EnvSubcommand::Unset(UnsetArgs { key: "HOME".into() }),
        &config,
        &cache,
    )
    .unwrap();
    assert_eq!(env.get("HOME").unwrap(), None);
    assert!(!cache.contains("HOME").unwrap());
}

#[test]
fn test_env_set_rejected_name() {
    let env = sample();
    let cache = EnvironmentCache::new(&env).unwrap();

    let err = run(
        EnvSubcommand::Set(SetArgs {
            key: String::new(),
            value: "x".into(),
        }),
        &Config::default(),
        &cache,
    )
    .unwrap_err();
    assert!(err.to_string().contains("setenv"), "unexpected error: {err}");
}

#[test]
fn test_env_list_text() {
    let env = sample();
    let cache = EnvironmentCache::new(&env).unwrap();
    let config = hiding_tokens();

    let list = |keys, values| {
        run(
            EnvSubcommand::List(ListArgs {
                keys,
                values,
                json: false,
            }),
            &config,
            &cache,
        )
        .unwrap()
    };

    insta::assert_snapshot!(list(false, false), @r"
    HOME=/home/user
    API_TOKEN=[hidden]
    LIST=a,b,,c
    ");
    insta::assert_snapshot!(list(true, false), @r"
    HOME
    API_TOKEN
    LIST
    ");
    insta::assert_snapshot!(list(false, true), @r"
    /home/user
    [hidden]
    a,b,,c
    ");
}

#[test]
fn test_env_list_json() {
    let env = sample();
    let cache = EnvironmentCache::new(&env).unwrap();
    let config = hiding_tokens();

    let out = run(
        EnvSubcommand::List(ListArgs {
            json: true,
            ..ListArgs::default()
        }),
        &config,
        &cache,
    )
    .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["HOME"], "/home/user");
    assert_eq!(parsed["API_TOKEN"], "[hidden]");

    let out = run(
        EnvSubcommand::List(ListArgs {
            keys: true,
            json: true,
            ..ListArgs::default()
        }),
        &config,
        &cache,
    )
    .unwrap();
    assert_eq!(out, "[\"HOME\",\"API_TOKEN\",\"LIST\"]\n");
}

#[test]
fn test_env_split_custom_separator() {
    let env = sample();
    let cache = EnvironmentCache::new(&env).unwrap();

    let out = run(
        EnvSubcommand::Split(SplitArgs {
            key: "LIST".into(),
            separator: Some(','),
        }),
        &Config::default(),
        &cache,
    )
    .unwrap();
    assert_eq!(out, "a\nb\n\nc\n");

    let out = run(
        EnvSubcommand::Split(SplitArgs {
            key: "MISSING".into(),
            separator: None,
        }),
        &Config::default(),
        &cache,
    )
    .unwrap();
    assert_eq!(out, "");
}

#[test]
fn test_env_split_hidden() {
    let env = sample();
    let cache = EnvironmentCache::new(&env).unwrap();

    let out = run(
        EnvSubcommand::Split(SplitArgs {
            key: "API_TOKEN".into(),
            separator: None,
        }),
        &hiding_tokens(),
        &cache,
    )
    .unwrap();
    assert_eq!(out, "[hidden]\n");
}

#[test]
fn test_args_command_output() {
    let captured = Arguments::from_args(["prog", "x", "y"]);
    let config = Config::default();

    let render = |args: ArgsArgs| {
        let mut out = Vec::new();
        execute_args_command(&args, &config, &captured, &mut out).map(|()| {
            String::from_utf8(out).expect("utf-8 output")
        })
    };

    insta::assert_snapshot!(render(ArgsArgs::default()).unwrap(), @r"
    0: prog
    1: x
    2: y
    ");
    assert_eq!(
        render(ArgsArgs {
            at: Some(2),
            json: false
        })
        .unwrap(),
        "y\n"
    );
    assert_eq!(
        render(ArgsArgs {
            at: None,
            json: true
        })
        .unwrap(),
        "[\"prog\",\"x\",\"y\"]\n"
    );

    let err = render(ArgsArgs {
        at: Some(3),
        json: false,
    })
    .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"argument index 3 out of range (count 3)");
}
