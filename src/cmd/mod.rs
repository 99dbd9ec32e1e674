// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   args, config, env
//! ```

pub mod args;
pub mod config;
pub mod env;

#[cfg(test)]
mod tests;
