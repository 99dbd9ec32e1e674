// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path-list splitting and joining.
//!
//! ```text
//! "/a:/b:/c" -> ["/a", "/b", "/c"]
//! "/a::/b"   -> ["/a", "", "/b"]     (no collapsing)
//! "/a"       -> ["/a"]
//! ""         -> []
//! ```

use crate::platform::PATH_SEPARATOR;

/// An owned path-list value that can be walked any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPath {
    value: String,
    separator: char,
}

impl SplitPath {
    /// Splits on the platform separator.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_separator(value, PATH_SEPARATOR)
    }

    #[must_use]
    pub fn with_separator(value: impl Into<String>, separator: char) -> Self {
        Self {
            value: value.into(),
            separator,
        }
    }

    /// The unsplit value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// A fresh iterator over the segments.
    #[must_use]
    pub fn iter(&self) -> Segments<'_> {
        Segments {
            inner: (!self.value.is_empty()).then(|| self.value.split(self.separator)),
        }
    }
}

impl<'a> IntoIterator for &'a SplitPath {
    type Item = &'a str;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the segments of a [`SplitPath`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    inner: Option<std::str::Split<'a, char>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

/// Joins path segments with the platform separator.
///
/// # Example
/// ```
/// use red_session::core::env::split::{SplitPath, join_paths};
///
/// let joined = join_paths(["/usr/bin", "/bin"]);
/// let split = SplitPath::new(joined.as_str());
/// assert_eq!(split.iter().collect::<Vec<_>>(), ["/usr/bin", "/bin"]);
/// ```
#[must_use]
pub fn join_paths<I>(segments: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            joined.push(PATH_SEPARATOR);
        }
        joined.push_str(segment.as_ref());
    }
    joined
}
