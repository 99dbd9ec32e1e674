// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for cached environment entries.
//!
//! ```text
//! EnvironmentEntry: "KEY=VALUE" in one String + key_len
//!                    key() = line[..key_len], value() = line[key_len+1..]
//! EnvData: Vec<EnvironmentEntry>, insertion order, unique keys
//!          lookup via platform::keys_match
//! ```

use crate::platform::keys_match;

/// A single `KEY=VALUE` pair stored as one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentEntry {
    line: String,
    key_len: usize,
}

impl EnvironmentEntry {
    /// Builds an entry from a name and a value.
    #[must_use]
    pub fn new(key: &str, value: &str) -> Self {
        let mut line = String::with_capacity(key.len() + value.len() + 1);
        line.push_str(key);
        line.push('=');
        line.push_str(value);
        Self {
            line,
            key_len: key.len(),
        }
    }

    /// Parses an environment block line.
    ///
    /// The key ends at the first `=` that is not the line's first character,
    /// so Windows drive variables (`=C:=C:\work`) keep their leading `=`.
    /// Returns `None` for lines without a separator or with an empty key.
    #[must_use]
    pub fn parse(line: impl Into<String>) -> Option<Self> {
        let line = line.into();
        let key_len = line.bytes().skip(1).position(|b| b == b'=')? + 1;
        Some(Self { line, key_len })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.line[..self.key_len]
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.line[self.key_len + 1..]
    }

    /// The whole `KEY=VALUE` line.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Whether this entry is the variable named `key` on this platform.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        keys_match(self.key(), key)
    }

    /// Replaces the value in place, keeping the key.
    pub fn set_value(&mut self, value: &str) {
        self.line.truncate(self.key_len + 1);
        self.line.push_str(value);
    }
}

impl std::fmt::Display for EnvironmentEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.line)
    }
}

/// Ordered entry storage behind the cache lock.
#[derive(Debug, Clone, Default)]
pub(super) struct EnvData {
    entries: Vec<EnvironmentEntry>,
}

impl EnvData {
    pub(super) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds storage from block lines, skipping malformed lines and keeping
    /// the first occurrence of a duplicated key. Returns the storage and the
    /// number of skipped lines.
    pub(super) fn from_block(block: Vec<String>) -> (Self, usize) {
        let mut data = Self::new();
        data.entries.reserve(block.len());
        let mut skipped = 0;

        for line in block {
            match EnvironmentEntry::parse(line) {
                Some(entry) if data.position(entry.key()).is_none() => data.entries.push(entry),
                _ => skipped += 1,
            }
        }

        (data, skipped)
    }

    pub(super) fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.matches(key))
    }

    pub(super) fn get(&self, index: usize) -> Option<&EnvironmentEntry> {
        self.entries.get(index)
    }

    pub(super) fn get_mut(&mut self, index: usize) -> Option<&mut EnvironmentEntry> {
        self.entries.get_mut(index)
    }

    /// Appends a new entry and returns its index.
    pub(super) fn push(&mut self, entry: EnvironmentEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Overwrites or appends the entry for `key`.
    pub(super) fn upsert(&mut self, key: &str, value: &str) {
        let entry = EnvironmentEntry::new(key, value);
        match self.position(key) {
            Some(index) => self.entries[index] = entry,
            None => self.entries.push(entry),
        }
    }

    pub(super) fn remove(&mut self, index: usize) -> EnvironmentEntry {
        self.entries.remove(index)
    }

    pub(super) fn retain(&mut self, keep: impl FnMut(&EnvironmentEntry) -> bool) {
        self.entries.retain(keep);
    }

    pub(super) fn entries(&self) -> &[EnvironmentEntry] {
        &self.entries
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}
