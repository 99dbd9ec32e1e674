// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The real process environment.

use super::{EnvBlock, EnvPrimitives, is_valid_key, validate_assignment};
use crate::error::SessionResult;
use crate::utility::encoding::os_str_to_utf8;
use tracing::trace;

/// Environment primitives backed by the process environment block.
///
/// Reads and writes go through `std::env`, which uses the wide-char API on
/// Windows. Keyed reads transcode to UTF-8 strictly; block reads leave out
/// entries that are not valid Unicode and count them.
///
/// # Thread Safety
/// The OS block is process-global. Writes made here are only ordered with
/// respect to other writes made through the same
/// [`EnvironmentCache`](crate::core::env::cache::EnvironmentCache); code that
/// calls the OS directly at the same time races with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnv;

impl EnvPrimitives for OsEnv {
    fn read_block(&self) -> SessionResult<EnvBlock> {
        let block = EnvBlock::decode(std::env::vars_os());
        trace!(
            count = block.lines.len(),
            undecodable = block.undecodable,
            "read environment block"
        );
        Ok(block)
    }

    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        if !is_valid_key(key) {
            return Ok(None);
        }
        match std::env::var_os(key) {
            Some(value) => Ok(Some(os_str_to_utf8(&value)?.to_owned())),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        // std panics on names and values the OS would reject
        validate_assignment(key, value)?;
        // SAFETY: callers serialize their own writes through the cache lock;
        // concurrent raw writers outside this crate are a documented hazard.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }

    fn remove(&self, key: &str) {
        if !is_valid_key(key) {
            return;
        }
        // SAFETY: same as `set`.
        unsafe {
            std::env::remove_var(key);
        }
    }
}
