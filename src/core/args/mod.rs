// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process argument capture.
//!
//! ```text
//! main()
//!   init_args(std::env::args_os())  -- exactly once, before any read
//!        |
//!        v
//!   OnceLock<Arguments>  (immutable, lock-free reads)
//!        |
//!        v
//!   arguments()?.at(i) / [i] / iter()
//!
//! read before init  -> ArgumentsUninitialized
//! second init       -> ArgumentsAlreadyCaptured
//! at(i >= len)      -> OutOfRange
//! ```


use std::ffi::OsString;
use std::sync::OnceLock;
use tracing::debug;

use crate::error::{InitializationError, SessionError, SessionResult};
use crate::utility::encoding::os_to_utf8;

static ARGUMENTS: OnceLock<Arguments> = OnceLock::new();

/// Captures the process arguments for the rest of the process lifetime.
///
/// The host must call this once, early in `main`, before anything reads
/// [`arguments`].
///
/// # Errors
///
/// Returns an initialization error if an argument is not valid Unicode, or
/// [`SessionError::ArgumentsAlreadyCaptured`] on a second call.
pub fn init_args<I>(args: I) -> SessionResult<&'static Arguments>
where
    I: IntoIterator<Item = OsString>,
{
    if ARGUMENTS.get().is_some() {
        return Err(SessionError::ArgumentsAlreadyCaptured);
    }

    let captured = Arguments::capture_os(args)?;
    let count = captured.len();
    ARGUMENTS
        .set(captured)
        .map_err(|_| SessionError::ArgumentsAlreadyCaptured)?;

    debug!(count, "process arguments captured");
    ARGUMENTS.get().ok_or(SessionError::ArgumentsUninitialized)
}

/// The arguments captured by [`init_args`].
///
/// # Errors
///
/// Returns [`SessionError::ArgumentsUninitialized`] if `init_args` has not
/// run yet.
pub fn arguments() -> SessionResult<&'static Arguments> {
    ARGUMENTS.get().ok_or(SessionError::ArgumentsUninitialized)
}

/// An immutable argument vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    args: Box<[String]>,
}

impl Arguments {
    /// Builds a snapshot from UTF-8 strings.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a snapshot from native strings.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError::Arguments`] wrapping the transcoding
    /// failure if an argument is not valid Unicode.
    pub fn capture_os<I>(args: I) -> SessionResult<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .map(os_to_utf8)
            .collect::<Result<Box<[String]>, _>>()
            .map_err(InitializationError::arguments)?;
        Ok(Self { args })
    }

    /// Number of arguments, program name included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Argument count as C's `argc`.
    #[must_use]
    pub fn argc(&self) -> i32 {
        i32::try_from(self.args.len()).unwrap_or(i32::MAX)
    }

    /// Checked access.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> SessionResult<&str> {
        self.get(index).ok_or(SessionError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// The program name, if any argument was captured.
    #[must_use]
    pub fn program(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.args.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }
}

/// Unchecked access; panics when `index >= len()`. Use [`Arguments::at`]
/// when the index is not known to be valid.
impl std::ops::Index<usize> for Arguments {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.args[index]
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}
