// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment cache synchronized with the OS block.
//!
//! # Architecture
//!
//! ```text
//! EnvironmentCache<P: EnvPrimitives>
//!   primitives: P                   (OS block = source of truth)
//!   data: Mutex<EnvData>            (one lock, one logical op)
//!
//! get/contains/var:  lock -> sync(key) -> copy out
//! set:               lock -> P::set -> upsert
//! erase:             lock -> P::remove -> drop entry
//! keys/values:       lock -> snapshot -> unlock -> iterate
//!
//! sync(key):
//!   cache  os
//!    -     v    insert, adopt OS value
//!    c     v    c != v: overwrite with OS value
//!    c     -    erase (removed externally)
//!    -     -    nothing
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace, warn};

use super::types::{EnvData, EnvironmentEntry};
use super::variable::Variable;
use crate::error::{InitializationError, SessionResult};
use crate::platform::{EnvPrimitives, OsEnv};

/// A view of an environment block that remembers what it has seen.
///
/// Every keyed read reconciles the cached entry with the OS before
/// answering, so changes made behind the cache's back show up on the next
/// lookup without an explicit invalidation step.
///
/// # Thread Safety
/// All operations, reads included, take one lock for their whole duration,
/// so operations on the same cache are linearized.
#[derive(Debug)]
pub struct EnvironmentCache<P: EnvPrimitives = OsEnv> {
    primitives: P,
    data: Mutex<EnvData>,
}

impl EnvironmentCache<OsEnv> {
    /// Loads the process environment.
    ///
    /// # Errors
    ///
    /// Returns an initialization error if the block cannot be enumerated.
    /// Variables that are not valid Unicode are left out, not fatal.
    pub fn from_os() -> SessionResult<Self> {
        Self::new(OsEnv)
    }
}

impl<P: EnvPrimitives> EnvironmentCache<P> {
    /// Creates a cache over `primitives`, bulk-loading its block.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError::Environment`] wrapping the cause if the
    /// block cannot be read; no cache is created in that case.
    pub fn new(primitives: P) -> SessionResult<Self> {
        let block = primitives
            .read_block()
            .map_err(InitializationError::environment)?;
        let (data, malformed) = EnvData::from_block(block.lines);

        let skipped = malformed + block.undecodable;
        if skipped > 0 {
            warn!(
                skipped,
                undecodable = block.undecodable,
                "ignored malformed, duplicate or non-unicode environment entries"
            );
        }
        debug!(count = data.len(), "environment cache loaded");

        Ok(Self {
            primitives,
            data: Mutex::new(data),
        })
    }

    /// The primitives this cache reconciles against.
    pub const fn primitives(&self) -> &P {
        &self.primitives
    }

    /// Gets a variable, reconciling the cache with the OS first.
    ///
    /// # Errors
    ///
    /// Returns an error only if the OS value cannot be read (e.g. it is not
    /// valid Unicode). A missing variable is `Ok(None)`.
    pub fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let mut data = self.lock();
        let index = self.sync(&mut data, key)?;
        Ok(index
            .and_then(|i| data.get(i))
            .map(|entry| entry.value().to_owned()))
    }

    /// Whether the variable exists, after reconciliation.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn contains(&self, key: &str) -> SessionResult<bool> {
        let mut data = self.lock();
        Ok(self.sync(&mut data, key)?.is_some())
    }

    /// Returns a handle bound to `key` holding its current value.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn var(&self, key: &str) -> SessionResult<Variable<'_, P>> {
        let value = self.get(key)?;
        Ok(Variable::new(self, key, value))
    }

    /// Sets a variable in the OS block, then in the cache.
    ///
    /// # Errors
    ///
    /// Returns a [`SystemCallError`](crate::error::SystemCallError) if the OS
    /// rejects the assignment. The cache is left untouched in that case.
    pub fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let mut data = self.lock();
        self.primitives.set(key, value)?;
        data.upsert(key, value);
        trace!(key, "variable set");
        Ok(())
    }

    /// Removes a variable from the OS block and the cache. Missing keys are
    /// ignored.
    pub fn erase(&self, key: &str) {
        let mut data = self.lock();
        self.primitives.remove(key);
        if let Some(index) = data.position(key) {
            data.remove(index);
            trace!(key, "variable erased");
        }
    }

    /// Reconciles every cached entry with a fresh read of the whole block.
    ///
    /// # Errors
    ///
    /// Returns the primitive's error if the block cannot be read; the cache
    /// is unchanged in that case.
    pub fn refresh(&self) -> SessionResult<()> {
        let mut data = self.lock();
        let (current, _) = EnvData::from_block(self.primitives.read_block()?.lines);

        let before = data.len();
        data.retain(|entry| current.position(entry.key()).is_some());
        let dropped = before - data.len();

        let mut adopted = 0;
        for entry in current.entries() {
            match data.position(entry.key()) {
                Some(index) => {
                    if let Some(cached) = data.get_mut(index)
                        && cached.value() != entry.value()
                    {
                        cached.set_value(entry.value());
                        adopted += 1;
                    }
                }
                None => {
                    data.push(entry.clone());
                    adopted += 1;
                }
            }
        }

        debug!(dropped, adopted, count = data.len(), "environment cache refreshed");
        Ok(())
    }

    /// Names of the cached variables, as they stand now.
    #[must_use]
    pub fn keys(&self) -> Keys {
        Keys(self.snapshot(|e| e.key().to_owned()).into_iter())
    }

    /// Values of the cached variables, as they stand now.
    #[must_use]
    pub fn values(&self) -> Values {
        Values(self.snapshot(|e| e.value().to_owned()).into_iter())
    }

    /// Cached `KEY=VALUE` entries, as they stand now.
    #[must_use]
    pub fn entries(&self) -> Entries {
        Entries(self.snapshot(EnvironmentEntry::clone).into_iter())
    }

    /// Number of cached variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no variables are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies the sync lookup for `key` and returns the entry index, if any.
    fn sync(&self, data: &mut EnvData, key: &str) -> SessionResult<Option<usize>> {
        let cached = data.position(key);
        let os_value = self.primitives.get(key)?;

        let index = match (cached, os_value) {
            (None, Some(value)) => {
                trace!(key, "adopting variable set outside the cache");
                Some(data.push(EnvironmentEntry::new(key, &value)))
            }
            (Some(index), Some(value)) => {
                if let Some(entry) = data.get_mut(index)
                    && entry.value() != value
                {
                    trace!(key, "variable changed outside the cache");
                    entry.set_value(&value);
                }
                Some(index)
            }
            (Some(index), None) => {
                trace!(key, "variable removed outside the cache");
                data.remove(index);
                None
            }
            (None, None) => None,
        };

        Ok(index)
    }

    fn snapshot<T>(&self, project: impl FnMut(&EnvironmentEntry) -> T) -> Vec<T> {
        self.lock().entries().iter().map(project).collect()
    }

    fn lock(&self) -> MutexGuard<'_, EnvData> {
        // Every operation leaves the entries consistent before a fallible step
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

macro_rules! snapshot_iter {
    ($($(#[$meta:meta])* $name:ident => $item:ty),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone)]
            pub struct $name(std::vec::IntoIter<$item>);

            impl Iterator for $name {
                type Item = $item;

                fn next(&mut self) -> Option<Self::Item> {
                    self.0.next()
                }

                fn size_hint(&self) -> (usize, Option<usize>) {
                    self.0.size_hint()
                }
            }

            impl DoubleEndedIterator for $name {
                fn next_back(&mut self) -> Option<Self::Item> {
                    self.0.next_back()
                }
            }

            impl ExactSizeIterator for $name {}

            impl std::iter::FusedIterator for $name {}
        )+
    };
}

snapshot_iter! {
    /// Iterator over variable names, see [`EnvironmentCache::keys`].
    Keys => String,
    /// Iterator over variable values, see [`EnvironmentCache::values`].
    Values => String,
    /// Iterator over cached entries, see [`EnvironmentCache::entries`].
    Entries => EnvironmentEntry,
}
