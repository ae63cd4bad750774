//! The immutable error record passed up from the driver layer.

use std::borrow::Cow;

use thiserror::Error;

use crate::code::ErrorCode;

/// Origin tag for errors raised by the driver layer itself.
pub const DRIVER_ORIGIN: &str = "DPI";

/// An error raised by, or passed through, the driver layer.
///
/// The record is immutable once constructed and owns copies of its strings,
/// so its lifetime is independent of whichever layer raised it. Internal
/// errors render as `DPI-<code, zero-padded to three digits>: <catalog
/// text>`; external errors display the original text unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// A failure detected by the binding itself, identified by a catalog code.
    #[error("{}-{:03}: {}", DRIVER_ORIGIN, .0.number(), .0.template())]
    Internal(ErrorCode),

    /// A failure surfaced by an underlying native subsystem, stored verbatim.
    #[error("{message}")]
    External {
        /// Tag of the subsystem that produced the error (e.g. `"OCI"`).
        origin: String,
        /// Error number as reported by the producing subsystem.
        code: i32,
        /// Error text as reported by the producing subsystem.
        message: String,
    },
}

impl DriverError {
    /// Wraps a failure reported by an underlying native subsystem.
    ///
    /// Origin, code, and message are copied into the record and never
    /// reformatted, so the subsystem's own error text reaches the caller
    /// byte for byte.
    pub fn external(
        origin: impl Into<String>,
        code: i32,
        message: impl Into<String>,
    ) -> Self {
        Self::External {
            origin: origin.into(),
            code,
            message: message.into(),
        }
    }

    /// The fully formatted, human-readable message.
    ///
    /// Identical to the [`Display`](std::fmt::Display) output and never
    /// empty. External text is returned borrowed, exactly as supplied.
    #[must_use]
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Internal(_) => Cow::Owned(self.to_string()),
            Self::External { message, .. } => Cow::Borrowed(message),
        }
    }

    /// The numeric error code, meaningful together with [`origin`](Self::origin).
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Internal(code) => code.number(),
            Self::External { code, .. } => *code,
        }
    }

    /// The tag of the subsystem that produced this error.
    #[must_use]
    pub fn origin(&self) -> &str {
        match self {
            Self::Internal(_) => DRIVER_ORIGIN,
            Self::External { origin, .. } => origin,
        }
    }
}

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;
