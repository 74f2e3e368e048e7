#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for the pkgbridge package-manager abstraction
//!
//! Every backend operation reports failure through the [`Error`] enum defined
//! here. Three kinds form the cross-backend taxonomy:
//!
//! - [`Error::NotSupported`] — the backend's design intentionally excludes
//!   the operation
//! - [`Error::NotAvailable`] — the backend's underlying tool or service
//!   cannot be reached at all
//! - [`Error::External`] — the underlying command or API ran and failed
//!
//! Kind detection never depends on message text: callers use
//! [`Error::kind`] or the `is_*` predicates, which see through any number of
//! [`Error::Context`] wrapping layers.

use thiserror::Error;

pub mod external;

pub use external::{truncate_output, ExternalFailure, MAX_CAPTURE_LEN};

/// Generic error type for cross-crate boundaries
#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    #[error("operation not supported: {operation} is not supported by {backend}{suffix}", suffix = reason_suffix(.reason))]
    NotSupported {
        operation: String,
        backend: String,
        reason: Option<String>,
    },

    #[error("backend not available: {backend}{suffix}", suffix = reason_suffix(.reason))]
    NotAvailable {
        backend: String,
        reason: Option<String>,
    },

    #[error("{0}")]
    External(Box<ExternalFailure>),

    #[error("{message}: {source}")]
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },

    #[error("I/O error: {message}")]
    Io {
        #[cfg_attr(feature = "serde", serde(with = "io_kind_as_str"))]
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error("internal error: {0}")]
    Internal(String),

    #[error("operation cancelled")]
    Cancelled,
}

/// Stable discriminant for programmatic error routing.
///
/// Obtained via [`Error::kind`], which resolves through [`Error::Context`]
/// wrapping so decorated errors report the kind of their root cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    NotSupported,
    NotAvailable,
    ExternalFailure,
    Io,
    Internal,
    Cancelled,
}

impl Error {
    /// Create a `NotSupported` error for an operation a backend does not
    /// implement.
    pub fn not_supported(operation: impl Into<String>, backend: impl Into<String>) -> Self {
        Self::NotSupported {
            operation: operation.into(),
            backend: backend.into(),
            reason: None,
        }
    }

    /// Create a `NotSupported` error carrying an explanation.
    pub fn not_supported_because(
        operation: impl Into<String>,
        backend: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::NotSupported {
            operation: operation.into(),
            backend: backend.into(),
            reason: Some(reason.into()),
        }
    }

    /// Create a `NotAvailable` error for a backend whose tool or service is
    /// unreachable.
    pub fn not_available(backend: impl Into<String>) -> Self {
        Self::NotAvailable {
            backend: backend.into(),
            reason: None,
        }
    }

    /// Create a `NotAvailable` error carrying an explanation.
    pub fn not_available_because(backend: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NotAvailable {
            backend: backend.into(),
            reason: Some(reason.into()),
        }
    }

    /// Create an external-failure error from its captured context.
    #[must_use]
    pub fn external(failure: ExternalFailure) -> Self {
        Self::External(Box::new(failure))
    }

    /// Create an internal error with a message
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Wrap this error with an additional layer of context.
    ///
    /// Kind detection is preserved: predicates on the wrapped error resolve
    /// to the root cause.
    #[must_use]
    pub fn context(self, message: impl Into<String>) -> Self {
        Self::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// The taxonomy kind of this error, resolved through context wrapping.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotSupported { .. } => ErrorKind::NotSupported,
            Self::NotAvailable { .. } => ErrorKind::NotAvailable,
            Self::External(_) => ErrorKind::ExternalFailure,
            Self::Context { source, .. } => source.kind(),
            Self::Io { .. } => ErrorKind::Io,
            Self::Internal(_) => ErrorKind::Internal,
            Self::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// True if this error (or its root cause) is `NotSupported`.
    #[must_use]
    pub fn is_not_supported(&self) -> bool {
        self.kind() == ErrorKind::NotSupported
    }

    /// True if this error (or its root cause) is `NotAvailable`.
    #[must_use]
    pub fn is_not_available(&self) -> bool {
        self.kind() == ErrorKind::NotAvailable
    }

    /// True if this error (or its root cause) is an external failure.
    #[must_use]
    pub fn is_external_failure(&self) -> bool {
        self.kind() == ErrorKind::ExternalFailure
    }

    /// The captured external-failure context, if this error carries one.
    #[must_use]
    pub fn external_failure(&self) -> Option<&ExternalFailure> {
        match self {
            Self::External(failure) => Some(failure),
            Self::Context { source, .. } => source.external_failure(),
            _ => None,
        }
    }

    /// The error one wrapping layer down, if any.
    #[must_use]
    pub fn unwrapped(&self) -> Option<&Error> {
        match self {
            Self::Context { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The innermost error after removing every wrapping layer.
    #[must_use]
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::Context { source, .. } => source.root_cause(),
            _ => self,
        }
    }
}

/// True if `err` is present and its root cause is `NotSupported`.
///
/// The absent-error form exists so call sites holding an optional failure
/// can classify it directly; `None` is never any taxonomy kind.
#[must_use]
pub fn is_not_supported(err: Option<&Error>) -> bool {
    err.is_some_and(Error::is_not_supported)
}

/// True if `err` is present and its root cause is `NotAvailable`.
#[must_use]
pub fn is_not_available(err: Option<&Error>) -> bool {
    err.is_some_and(Error::is_not_available)
}

/// True if `err` is present and its root cause is an external failure.
#[must_use]
pub fn is_external_failure(err: Option<&Error>) -> bool {
    err.is_some_and(Error::is_external_failure)
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON error: {err}"))
    }
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!(": {reason}"),
        None => String::new(),
    }
}

/// Result type alias for pkgbridge operations
pub type Result<T> = std::result::Result<T, Error>;

// Serde helper module for io::ErrorKind as string
#[cfg(feature = "serde")]
mod io_kind_as_str {
    use serde::{Deserialize, Deserializer, Serializer};
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(kind: &std::io::ErrorKind, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&format!("{kind:?}"))
    }
    pub fn deserialize<'de, D>(deserializer: D) -> Result<std::io::ErrorKind, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // Best effort mapping; default to Other
        Ok(match s.as_str() {
            "NotFound" => std::io::ErrorKind::NotFound,
            "PermissionDenied" => std::io::ErrorKind::PermissionDenied,
            "ConnectionRefused" => std::io::ErrorKind::ConnectionRefused,
            "BrokenPipe" => std::io::ErrorKind::BrokenPipe,
            "WouldBlock" => std::io::ErrorKind::WouldBlock,
            "InvalidInput" => std::io::ErrorKind::InvalidInput,
            "InvalidData" => std::io::ErrorKind::InvalidData,
            "TimedOut" => std::io::ErrorKind::TimedOut,
            "Interrupted" => std::io::ErrorKind::Interrupted,
            "Unsupported" => std::io::ErrorKind::Unsupported,
            "UnexpectedEof" => std::io::ErrorKind::UnexpectedEof,
            _ => std::io::ErrorKind::Other,
        })
    }
}
