// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Raw environment primitives and per-build platform policy.
//!
//! ```text
//! EnvPrimitives (trait)
//!   read_block()  -> EnvBlock { lines: ["KEY=VALUE", ...], undecodable }
//!   get(key)      -> Option<value>
//!   set(key, val) -> SystemCallError on rejection
//!   remove(key)   -> no-op if absent
//!
//! OsEnv      std::env (wide-char API on Windows)
//! MemoryEnv  in-memory block + fault injection
//!
//! PATH_SEPARATOR   ':' (POSIX)  ';' (Windows)
//! keys_match()     case-sensitive (POSIX), ASCII case-insensitive (Windows)
//! ```
//!
//! This is the only module that branches on the target platform.

pub mod memory;
pub mod os;


pub use memory::MemoryEnv;
pub use os::OsEnv;

use std::ffi::OsString;

use crate::error::{SessionResult, SystemCallError};
use crate::utility::encoding::os_to_utf8;

/// Character delimiting entries of a path-list variable such as `PATH`.
#[cfg(windows)]
pub const PATH_SEPARATOR: char = ';';

/// Character delimiting entries of a path-list variable such as `PATH`.
#[cfg(not(windows))]
pub const PATH_SEPARATOR: char = ':';

/// Whether two variable names denote the same variable on this platform.
#[cfg(windows)]
#[must_use]
pub fn keys_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Whether two variable names denote the same variable on this platform.
#[cfg(not(windows))]
#[must_use]
pub fn keys_match(a: &str, b: &str) -> bool {
    a == b
}

/// One enumeration of an environment block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvBlock {
    /// Entries as `KEY=VALUE` lines, in block order.
    pub lines: Vec<String>,
    /// Entries left out because their name or value is not valid Unicode.
    pub undecodable: usize,
}

impl EnvBlock {
    /// Transcodes native name/value pairs, counting the ones that fail.
    ///
    /// An undecodable entry only affects itself; reading that variable by
    /// name still reports the transcoding error.
    #[must_use]
    pub fn decode(pairs: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        let mut block = Self::default();
        for (key, value) in pairs {
            match (os_to_utf8(key), os_to_utf8(value)) {
                (Ok(key), Ok(value)) => {
                    let mut line = String::with_capacity(key.len() + value.len() + 1);
                    line.push_str(&key);
                    line.push('=');
                    line.push_str(&value);
                    block.lines.push(line);
                }
                _ => block.undecodable += 1,
            }
        }
        block
    }
}

impl From<Vec<String>> for EnvBlock {
    fn from(lines: Vec<String>) -> Self {
        Self {
            lines,
            undecodable: 0,
        }
    }
}

/// Operations against an environment block.
///
/// Implementations must be usable from several threads; callers that need
/// consistency across calls serialize them themselves (see
/// [`EnvironmentCache`](crate::core::env::cache::EnvironmentCache)).
pub trait EnvPrimitives: Send + Sync {
    /// Enumerates the whole block.
    ///
    /// Entries that cannot be transcoded are counted in
    /// [`EnvBlock::undecodable`], not reported as errors.
    ///
    /// # Errors
    ///
    /// Returns an error only if the block cannot be enumerated at all.
    fn read_block(&self) -> SessionResult<EnvBlock>;

    /// Reads one variable.
    ///
    /// # Errors
    ///
    /// Returns a transcoding error if the value is not valid Unicode.
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    /// Creates or overwrites one variable.
    ///
    /// # Errors
    ///
    /// Returns [`SystemCallError`](crate::error::SystemCallError) if the
    /// platform rejects the name or the value.
    fn set(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Removes one variable. Absent or unnameable keys are ignored.
    fn remove(&self, key: &str);
}

impl<P: EnvPrimitives + ?Sized> EnvPrimitives for &P {
    fn read_block(&self) -> SessionResult<EnvBlock> {
        (**self).read_block()
    }

    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// Number of leading name bytes where `=` is tolerated.
///
/// Windows spells its hidden per-drive variables with a leading `=`
/// (`=C:=C:\work`); POSIX `setenv` rejects `=` anywhere in the name.
#[cfg(windows)]
const NAME_EQ_OFFSET: usize = 1;
#[cfg(not(windows))]
const NAME_EQ_OFFSET: usize = 0;

/// Checks a name/value pair the way `setenv` does.
///
/// # Errors
///
/// Returns an `InvalidInput` [`SystemCallError`] for an empty name, a name
/// containing `=` (past the first character on Windows), or a NUL anywhere.
pub fn validate_assignment(key: &str, value: &str) -> Result<(), SystemCallError> {
    if key.is_empty() {
        return Err(SystemCallError::invalid_input(
            "setenv",
            key,
            "variable name is empty",
        ));
    }
    if key.bytes().skip(NAME_EQ_OFFSET).any(|b| b == b'=') {
        return Err(SystemCallError::invalid_input(
            "setenv",
            key,
            "variable name contains '='",
        ));
    }
    if key.contains('\0') || value.contains('\0') {
        return Err(SystemCallError::invalid_input(
            "setenv",
            key,
            "variable contains a NUL character",
        ));
    }
    Ok(())
}

/// Whether `key` can name a variable at all.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    validate_assignment(key, "").is_ok()
}
