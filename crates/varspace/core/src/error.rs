//! Common error infrastructure for varspace-core.
//!
//! Every fallible operation in this crate returns one of the error types defined
//! here. Errors are plain values: nothing is retried or recovered internally, and
//! the caller decides whether out-of-range input is fatal or merely rejected.

use crate::kind::AddressKind;

/// Severity level of an error, used for categorization by callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The input integer does not belong where the caller tried to put it.
    ///
    /// Examples: value outside a kind's range, integer outside every range
    Validation,

    /// The address is valid but one of its decomposed fields has no known meaning.
    ///
    /// Examples: info digit 7 or 8
    Unsupported,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Common trait for all varspace-core errors.
///
/// Provides a uniform interface for error classification across the crate.
pub trait AddressError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// An integer fell outside the fixed range of the kind it was meant for.
///
/// Raised by construction and by `add`/`sub_int`. The attempted value is widened to
/// `i64` so an arithmetic result that overflowed `i32` is still reported exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{attempted} is out of range for {kind} [{min}, {max}]")]
pub struct RangeError {
    /// Kind whose range was violated.
    pub kind: AddressKind,
    /// Value that was rejected.
    pub attempted: i64,
    /// Inclusive lower bound of the kind.
    pub min: i32,
    /// Inclusive upper bound of the kind.
    pub max: i32,
}

impl RangeError {
    pub(crate) fn new(kind: AddressKind, attempted: i64) -> Self {
        let range = kind.range();
        Self {
            kind,
            attempted,
            min: range.min(),
            max: range.max(),
        }
    }
}

impl AddressError for RangeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "ADDRESS_OUT_OF_RANGE"
    }
}

/// Errors produced by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassifyError {
    /// No known range contains the integer.
    #[error("{0} does not belong to any variable address range")]
    Unmapped(i32),
}

impl AddressError for ClassifyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unmapped(_) => "CLASSIFY_UNMAPPED",
        }
    }
}

/// The last decimal digit of an info address has no assigned info field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoTypeError {
    /// Digits 7 and 8 are not mapped to any info field.
    #[error("info digit {digit} is not assigned to any info field")]
    UnassignedDigit {
        /// Offending digit (0..=9).
        digit: u8,
    },
}

impl AddressError for InfoTypeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Unsupported
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnassignedDigit { .. } => "INFO_DIGIT_UNASSIGNED",
        }
    }
}

/// Errors produced when composing an address from its decomposed parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PartsError {
    /// A part does not fit into its field.
    #[error("{field} = {value} does not fit in [{min}, {max}]")]
    FieldOutOfRange {
        /// Name of the field.
        field: &'static str,
        /// Rejected value.
        value: i32,
        /// Inclusive lower bound of the field.
        min: i32,
        /// Inclusive upper bound of the field.
        max: i32,
    },

    /// The parts fit their fields but the composed value leaves the kind's range.
    #[error(transparent)]
    Range(#[from] RangeError),
}

impl PartsError {
    /// Checks `value` against `[min, max]` for the named field.
    pub(crate) fn check(field: &'static str, value: i32, min: i32, max: i32) -> Result<i32, Self> {
        if value < min || value > max {
            return Err(Self::FieldOutOfRange {
                field,
                value,
                min,
                max,
            });
        }
        Ok(value)
    }
}

impl AddressError for PartsError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::FieldOutOfRange { .. } => "PARTS_FIELD_OUT_OF_RANGE",
            Self::Range(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_error_reports_bounds_of_kind() {
        let error = RangeError::new(AddressKind::ChangeableDatabase, 1_200_000_000);
        assert_eq!(error.min, 1_100_000_000);
        assert_eq!(error.max, 1_199_999_999);
        assert_eq!(error.error_code(), "ADDRESS_OUT_OF_RANGE");
        assert_eq!(
            error.to_string(),
            "1200000000 is out of range for ChangeableDatabaseAddress [1100000000, 1199999999]"
        );
    }

    #[test]
    fn parts_error_forwards_range_code() {
        let error = PartsError::from(RangeError::new(AddressKind::StringVariable, 0));
        assert_eq!(error.error_code(), "ADDRESS_OUT_OF_RANGE");
        assert_eq!(error.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn parts_check_is_inclusive() {
        assert_eq!(PartsError::check("item_id", 99, 0, 99), Ok(99));
        assert!(matches!(
            PartsError::check("item_id", 100, 0, 99),
            Err(PartsError::FieldOutOfRange { value: 100, .. })
        ));
    }

    #[test]
    fn info_error_is_unsupported() {
        let error = InfoTypeError::UnassignedDigit { digit: 7 };
        assert_eq!(error.severity(), ErrorSeverity::Unsupported);
        assert_eq!(error.severity().as_str(), "unsupported");
    }
}
