// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Native string transcoding.
//!
//! ```text
//! native (OsStr: bytes on POSIX, UTF-16 on Windows) --(strict)--> UTF-8
//! ```
//!
//! Everything inside the crate is UTF-8. Conversions fail with
//! [`TranscodingError`]; the lossy rendering is kept in the error for
//! messages only.

use std::ffi::{OsStr, OsString};

use crate::error::TranscodingError;

/// Converts a native OS string to UTF-8.
///
/// # Errors
///
/// Returns [`TranscodingError::NonUnicode`] if the string is not valid
/// Unicode (non-UTF-8 bytes on POSIX, unpaired surrogates on Windows).
pub fn os_to_utf8(value: OsString) -> Result<String, TranscodingError> {
    value
        .into_string()
        .map_err(|raw| TranscodingError::NonUnicode {
            lossy: raw.to_string_lossy().into_owned(),
        })
}

/// Borrowing variant of [`os_to_utf8`].
///
/// # Errors
///
/// Returns [`TranscodingError::NonUnicode`] if the string is not valid Unicode.
pub fn os_str_to_utf8(value: &OsStr) -> Result<&str, TranscodingError> {
    value.to_str().ok_or_else(|| TranscodingError::NonUnicode {
        lossy: value.to_string_lossy().into_owned(),
    })
}
