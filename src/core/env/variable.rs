// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Handle bound to a single variable.

use super::cache::EnvironmentCache;
use super::split::SplitPath;
use crate::error::SessionResult;
use crate::platform::{EnvPrimitives, OsEnv};

/// A variable name plus the value it had when the handle was made.
///
/// Handles are not kept by the cache; ask [`EnvironmentCache::var`] again to
/// observe later changes.
#[derive(Debug)]
pub struct Variable<'a, P: EnvPrimitives = OsEnv> {
    cache: &'a EnvironmentCache<P>,
    key: String,
    value: Option<String>,
}

impl<'a, P: EnvPrimitives> Variable<'a, P> {
    pub(super) fn new(cache: &'a EnvironmentCache<P>, key: &str, value: Option<String>) -> Self {
        Self {
            cache,
            key: key.to_owned(),
            value,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value as last read or written through this handle.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the variable existed when last observed.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Sets the variable through the cache and updates this handle.
    ///
    /// # Errors
    ///
    /// Returns a [`SystemCallError`](crate::error::SystemCallError) if the OS
    /// rejects the assignment; the handle keeps its old value.
    pub fn assign(&mut self, value: impl Into<String>) -> SessionResult<&mut Self> {
        let value = value.into();
        self.cache.set(&self.key, &value)?;
        self.value = Some(value);
        Ok(self)
    }

    /// Splits a private copy of the current value on the platform path
    /// separator.
    #[must_use]
    pub fn split(&self) -> SplitPath {
        SplitPath::new(self.value.clone().unwrap_or_default())
    }
}

impl<P: EnvPrimitives> std::fmt::Display for Variable<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value.as_deref().unwrap_or_default())
    }
}

impl<P: EnvPrimitives> From<Variable<'_, P>> for String {
    fn from(var: Variable<'_, P>) -> Self {
        var.value.unwrap_or_default()
    }
}
