//! Error types for parcelsort

use thiserror::Error;

use crate::measurement::Field;

/// Main error type for classification.
///
/// Invalid input is the only failure the classifier can produce: there are no
/// external resources, so no I/O or timeout errors exist at this level.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SortError {
    /// A measurement was missing, non-finite or negative.
    #[error("Invalid input: {field} {reason}; all inputs must be finite non-negative numbers")]
    InvalidInput {
        /// First offending field, in width/height/length/mass order.
        field: Field,
        /// Why the value was refused.
        reason: InvalidReason,
    },
}

impl SortError {
    /// Returns the offending field.
    pub fn field(&self) -> Field {
        match self {
            SortError::InvalidInput { field, .. } => *field,
        }
    }

    /// Returns why the field was refused.
    pub fn reason(&self) -> InvalidReason {
        match self {
            SortError::InvalidInput { reason, .. } => *reason,
        }
    }
}

/// Reason a single measurement failed domain validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidReason {
    /// No value was supplied.
    Missing,
    /// `NaN` or infinite.
    NotFinite(f64),
    /// Strictly below zero.
    Negative(f64),
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::Missing => write!(f, "is missing"),
            InvalidReason::NotFinite(v) => write!(f, "is not finite ({})", v),
            InvalidReason::Negative(v) => write!(f, "is negative ({})", v),
        }
    }
}

/// Result type alias for classification.
pub type Result<T> = std::result::Result<T, SortError>;
