// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> init_args --> Command Dispatch
//!   Version | Options | Inis | Env | Args
//! ```

use std::process::ExitCode;

use red_session::cli::{self, Command};
use red_session::cmd::args::run_args_command;
use red_session::cmd::config::{
    build_config_loader, load_config, run_inis_command, run_options_command,
};
use red_session::cmd::env::run_env_command;
use red_session::config::Config;
use red_session::core::args::init_args;
use red_session::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&config.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_args(std::env::args_os()) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    dispatch_command(&cli, &config)
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Env(args)) => run_env_command(args, config),
        Some(Command::Args(args)) => run_args_command(args, config),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
