// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory environment block.
//!
//! ```text
//! MemoryEnv
//!   vars:   Mutex<Vec<(key, value)>>   insertion order, platform key policy
//!   faults: fail_block_reads / fail_writes (AtomicBool)
//! ```
//!
//! Behaves like the OS block (same name validation, same key matching) so
//! the cache can be driven through every reconciliation branch without
//! touching process state.

use super::{EnvBlock, EnvPrimitives, is_valid_key, keys_match, validate_assignment};
use crate::error::{SessionResult, SystemCallError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// An environment block that lives in memory.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: Mutex<Vec<(String, String)>>,
    fail_block_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a block from name/value pairs. Later duplicates overwrite
    /// earlier ones, as repeated `setenv` calls would.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let env = Self::new();
        {
            let mut vars = env.lock();
            for (key, value) in pairs {
                upsert(&mut vars, key.into(), value.into());
            }
        }
        env
    }

    /// Makes every subsequent `read_block` fail with an I/O error.
    pub fn fail_block_reads(&self, fail: bool) {
        self.fail_block_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `set` fail with a [`SystemCallError`].
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of variables in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(String, String)>> {
        self.vars.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn upsert(vars: &mut Vec<(String, String)>, key: String, value: String) {
    match vars.iter_mut().find(|(k, _)| keys_match(k, &key)) {
        Some(slot) => *slot = (key, value),
        None => vars.push((key, value)),
    }
}

impl EnvPrimitives for MemoryEnv {
    fn read_block(&self) -> SessionResult<EnvBlock> {
        if self.fail_block_reads.load(Ordering::SeqCst) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::OutOfMemory,
                "environment block copy failed",
            )
            .into());
        }
        let lines: Vec<String> = self
            .lock()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        Ok(lines.into())
    }

    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self
            .lock()
            .iter()
            .find(|(k, _)| keys_match(k, key))
            .map(|(_, value)| value.clone()))
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        validate_assignment(key, value)?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SystemCallError::new(
                "setenv",
                key,
                std::io::Error::new(std::io::ErrorKind::OutOfMemory, "environment is full"),
            )
            .into());
        }
        upsert(&mut self.lock(), key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if !is_valid_key(key) {
            return;
        }
        self.lock().retain(|(k, _)| !keys_match(k, key));
    }
}
