//! Error types for calculator operations.
//!
//! Every failure the calculator can report is an "invalid input" error:
//! it is detected before any arithmetic runs and is surfaced to the
//! caller synchronously. The `Display` output of each variant is the
//! human-readable message returned to HTTP clients, so wording changes
//! here are visible on the wire.
//!
//! # Example
//!
//! ```
//! use calc_core::{CalcError, Result};
//!
//! fn checked_divisor(value: f64) -> Result<f64> {
//!     if value == 0.0 {
//!         return Err(CalcError::DivisionByZero);
//!     }
//!     Ok(value)
//! }
//!
//! let err = checked_divisor(0.0).unwrap_err();
//! assert_eq!(err.to_string(), "Cannot divide by zero.");
//! ```

use thiserror::Error;

/// Main error type for calculator operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The request body was not a JSON object.
    #[error("Request body must be a JSON object")]
    InvalidBody,

    /// A required operand field is absent (or `null`).
    #[error("{field} is required")]
    MissingOperand {
        /// Name of the missing field
        field: String,
    },

    /// An operand field is present but is not a JSON number.
    #[error("{field} must be a number")]
    NotANumber {
        /// Name of the offending field
        field: String,
        /// JSON type that was found instead
        found: &'static str,
    },

    /// Divisor of a division or modulo is zero.
    #[error("Cannot divide by zero.")]
    DivisionByZero,

    /// Square root requested for a negative number.
    #[error("Cannot calculate square root of a negative number")]
    NegativeSquareRoot,

    /// Operands of the wrong shape were passed to an operation.
    #[error("Operation '{operation}' expects {expected} operand(s)")]
    ArityMismatch {
        /// Name of the operation
        operation: &'static str,
        /// Number of operands it takes
        expected: usize,
    },
}

impl CalcError {
    /// Creates a MissingOperand error.
    pub fn missing_operand(field: impl Into<String>) -> Self {
        Self::MissingOperand {
            field: field.into(),
        }
    }

    /// Creates a NotANumber error.
    pub fn not_a_number(field: impl Into<String>, found: &'static str) -> Self {
        Self::NotANumber {
            field: field.into(),
            found,
        }
    }

    /// Returns the operand field this error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingOperand { field } | Self::NotANumber { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Returns the JSON type found in place of a number, if any.
    pub fn found(&self) -> Option<&'static str> {
        match self {
            Self::NotANumber { found, .. } => Some(*found),
            _ => None,
        }
    }

    /// Returns true if the error comes from operand extraction rather than
    /// from an arithmetic domain check.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidBody | Self::MissingOperand { .. } | Self::NotANumber { .. }
        )
    }
}

/// Type alias for Results with CalcError.
pub type Result<T> = std::result::Result<T, CalcError>;
