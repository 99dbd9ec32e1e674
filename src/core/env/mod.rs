// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable access.
//!
//! # Architecture
//!
//! ```text
//! environment() --> &'static EnvironmentCache<OsEnv>   (built on first use)
//!
//! EnvironmentCache (Mutex<EnvData>)
//!   get/contains/var --> sync with OS --> Variable
//!   set/erase        --> OS first, then cache
//!   keys/values      --> snapshot iterators
//!
//! Variable --> split() --> SplitPath --> Segments
//! ```
//!
//! - **OS is authoritative**: keyed reads adopt external changes
//! - **One lock per cache**: operations are linearized
//! - **UTF-8 internal**: transcoding at the platform boundary only

pub mod cache;
pub mod split;
pub mod types;
pub mod variable;


use std::sync::OnceLock;

use crate::error::SessionResult;
use cache::EnvironmentCache;

/// Returns the process-wide environment cache, loading it on first use.
///
/// # Errors
///
/// Returns an initialization error if the environment block cannot be read.
/// A later call retries the load.
pub fn environment() -> SessionResult<&'static EnvironmentCache> {
    static ENVIRONMENT: OnceLock<EnvironmentCache> = OnceLock::new();

    if let Some(cache) = ENVIRONMENT.get() {
        return Ok(cache);
    }

    let cache = EnvironmentCache::from_os()?;
    // A concurrent first call may have won the race; keep whichever landed
    Ok(ENVIRONMENT.get_or_init(|| cache))
}
