// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                SessionError (<= 24 bytes)
//!                       |
//!   +------+------+-----+------+------+-----+
//!   |      |      |     |      |      |     |
//!   v      v      v     v      v      v     v
//! Init  SysCall OutOf Transc  Args   Cfg    Io
//! Box    Box    Range  Box   Uninit  Box   Box
//!                            /Twice
//!
//! Sub-errors:
//!   Initialization  Environment{source}, Arguments{source}
//!   SystemCall      operation + key + io::Error
//!   Transcoding     NonUnicode
//!   Config          ParseError, InvalidValue
//! ```
//!
//! "Not found" is never an error: lookups return `None`, erasing a missing
//! key is a no-op.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`, used by the CLI layer.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SessionError`].
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Top-level library error type.
///
/// Large sub-errors are boxed to keep this enum at 24 bytes on the stack.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The environment block or the argument vector could not be captured.
    #[error("initialization error: {0}")]
    Initialization(#[from] Box<InitializationError>),

    /// An OS environment primitive failed.
    #[error("system call error: {0}")]
    SystemCall(#[from] Box<SystemCallError>),

    /// Checked argument access past the captured count.
    #[error("argument index {index} out of range (count {len})")]
    OutOfRange { index: usize, len: usize },

    /// Native string conversion failed.
    #[error("transcoding error: {0}")]
    Transcoding(#[from] Box<TranscodingError>),

    /// Arguments were read before `init_args` ran.
    #[error("process arguments read before initialization")]
    ArgumentsUninitialized,

    /// `init_args` ran more than once.
    #[error("process arguments already captured")]
    ArgumentsAlreadyCaptured,

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SessionError {
                fn from(err: $error) -> Self {
                    SessionError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    InitializationError => Initialization,
    SystemCallError => SystemCall,
    TranscodingError => Transcoding,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Initialization Errors ---

/// Failure to build one of the process-wide views.
///
/// Always fatal to constructing the abstraction; the wrapped cause is kept
/// as the error source.
#[derive(Debug, Error)]
pub enum InitializationError {
    /// The OS environment block could not be enumerated or copied.
    #[error("failed to create environment")]
    Environment {
        #[source]
        source: SessionError,
    },

    /// The process arguments could not be captured.
    #[error("failed to create arguments")]
    Arguments {
        #[source]
        source: SessionError,
    },
}

impl InitializationError {
    /// Wrap `source` as an environment construction failure.
    #[must_use]
    pub fn environment(source: impl Into<SessionError>) -> SessionError {
        Self::Environment {
            source: source.into(),
        }
        .into()
    }

    /// Wrap `source` as an argument capture failure.
    #[must_use]
    pub fn arguments(source: impl Into<SessionError>) -> SessionError {
        Self::Arguments {
            source: source.into(),
        }
        .into()
    }
}

// --- System Call Errors ---

/// An OS environment primitive rejected the request.
#[derive(Debug, Error)]
#[error("{operation} '{key}' failed: {source}")]
pub struct SystemCallError {
    /// Name of the primitive, e.g. `setenv`.
    pub operation: &'static str,
    /// Variable the call was made for.
    pub key: String,
    #[source]
    pub source: std::io::Error,
}

impl SystemCallError {
    pub fn new(operation: &'static str, key: impl Into<String>, source: std::io::Error) -> Self {
        Self {
            operation,
            key: key.into(),
            source,
        }
    }

    /// Shorthand for an `InvalidInput` rejection with a message.
    pub fn invalid_input(
        operation: &'static str,
        key: impl Into<String>,
        message: &'static str,
    ) -> Self {
        Self::new(
            operation,
            key,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, message),
        )
    }
}

// --- Transcoding Errors ---

/// Native string conversion errors.
#[derive(Debug, Error)]
pub enum TranscodingError {
    /// A native string is not valid Unicode.
    #[error("native string is not valid unicode: {lossy:?}")]
    NonUnicode { lossy: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration input.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
