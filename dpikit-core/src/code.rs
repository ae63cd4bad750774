//! The internal error-code catalog.
//!
//! Every failure the binding detects itself is identified by one of these
//! codes. The numeric values are a stable contract: callers may persist or
//! match on them, so a new condition is appended at the next number and
//! existing codes are never renumbered or removed.

use strum::EnumIter;

/// An error condition detected by the driver layer itself.
///
/// The catalog is closed: every code has a message template, checked
/// exhaustively at compile time in [`template`](Self::template), so the
/// enum cannot grow without the catalog growing in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ErrorCode {
    /// Placeholder for the absence of an error.
    NoError = 0,
    /// Internal logic failure that should be unreachable.
    Internal = 1,
    /// The error description could not be retrieved from the OCI layer.
    DescriptionLookupFailed = 2,
    /// No OCI environment handle has been created.
    NoEnvironment = 3,
    /// Invalid state while working with a timestamp.
    InvalidTimestampState = 4,
    /// A timestamp was used before its required initialization.
    UninitializedTimestamp = 5,
    /// User or password supplied while external authentication is enabled.
    ExternalAuthConflict = 6,
    /// Invalid OCI handle or descriptor.
    InvalidHandle = 7,
    /// Memory allocation failed.
    AllocationFailed = 8,
    /// Unexpected NULL value where one was required.
    UnexpectedNull = 9,
}

impl ErrorCode {
    /// The catalog message template for this code.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::NoError => "not an error",
            Self::Internal => "internal error",
            Self::DescriptionLookupFailed => "could not get OCI error message",
            Self::NoEnvironment => "no OCI environment handle created",
            Self::InvalidTimestampState => "invalid state while working with timestamp",
            Self::UninitializedTimestamp => {
                "uninitialized state while working with timestamp"
            }
            Self::ExternalAuthConflict => {
                "user and password should not be set when using external authentication"
            }
            Self::InvalidHandle => "invalid OCI handle or descriptor",
            Self::AllocationFailed => "memory allocation failed",
            Self::UnexpectedNull => "unexpected NULL value",
        }
    }

    /// The stable numeric value of this code.
    #[must_use]
    pub const fn number(self) -> i32 {
        self as i32
    }

    /// Looks up a code by its numeric value.
    ///
    /// Returns `None` for numbers outside the catalog, e.g. when matching a
    /// code that was persisted by a newer version of the binding.
    #[must_use]
    pub const fn from_number(number: i32) -> Option<Self> {
        match number {
            0 => Some(Self::NoError),
            1 => Some(Self::Internal),
            2 => Some(Self::DescriptionLookupFailed),
            3 => Some(Self::NoEnvironment),
            4 => Some(Self::InvalidTimestampState),
            5 => Some(Self::UninitializedTimestamp),
            6 => Some(Self::ExternalAuthConflict),
            7 => Some(Self::InvalidHandle),
            8 => Some(Self::AllocationFailed),
            9 => Some(Self::UnexpectedNull),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_catalog_is_total() {
        for code in ErrorCode::iter() {
            assert!(
                !code.template().is_empty(),
                "empty template for {code:?}"
            );
        }
    }

    #[test]
    fn test_numbers_are_dense_and_stable() {
        let numbers: Vec<i32> = ErrorCode::iter().map(ErrorCode::number).collect();
        assert_eq!(numbers, (0..=9).collect::<Vec<i32>>());
        for code in ErrorCode::iter() {
            assert_eq!(ErrorCode::from_number(code.number()), Some(code));
        }
    }

    #[test]
    fn test_from_number_rejects_unknown_codes() {
        assert_eq!(ErrorCode::from_number(10), None);
        assert_eq!(ErrorCode::from_number(-1), None);
    }
}
