// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment and argument access.
//!
//! ```text
//!              core
//!               |
//!          +----+----+
//!          |         |
//!          v         v
//!         env       args
//!          |         |
//!   EnvironmentCache  Arguments
//!   Variable          init_args()
//!   SplitPath         arguments()
//! ```

pub mod args;
pub mod env;
