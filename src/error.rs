//! Error types for linear algebra operations.
//!
//! Every fallible operation in this crate fails before it allocates its
//! result, so an `Err` never leaves a partially built value behind.

use thiserror::Error;

/// Main error type for `ml_linalg` operations.
///
/// # Examples
///
/// ```
/// use ml_linalg::LinalgError;
///
/// let err = LinalgError::dimension_mismatch("add", "2", "3");
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operand shapes are incompatible for the operation.
    #[error("{op}: dimension mismatch, expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Operation that rejected its operands
        op: &'static str,
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// An accessor was called outside the valid bounds.
    #[error("index {index} out of range (len={len})")]
    IndexOutOfRange {
        /// Offending index, rendered as `i` or `(r, c)`
        index: String,
        /// Size of the addressed dimension, rendered the same way
        len: String,
    },

    /// A constructor was given arguments that cannot describe a valid value.
    #[error("invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// Argument name
        arg: &'static str,
        /// Constraint that was violated
        reason: String,
    },
}

impl LinalgError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(
        op: &'static str,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        let err = Self::DimensionMismatch {
            op,
            expected: expected.into(),
            actual: actual.into(),
        };
        log::debug!("{err}");
        err
    }

    /// Create an index out of range error
    #[must_use]
    pub fn index_out_of_range(index: impl Into<String>, len: impl Into<String>) -> Self {
        let err = Self::IndexOutOfRange {
            index: index.into(),
            len: len.into(),
        };
        log::debug!("{err}");
        err
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        let err = Self::InvalidArgument {
            arg,
            reason: reason.into(),
        };
        log::debug!("{err}");
        err
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, LinalgError>;
