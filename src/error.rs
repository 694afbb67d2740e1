//! Error types for Recomendar operations.
//!
//! Provides rich error context for library consumers. Note that cold-start
//! and empty-candidate outcomes are *not* errors; they are tagged result
//! values (see [`crate::engine::Outcome`]).

use std::fmt;

/// Main error type for Recomendar operations.
///
/// Covers lookup failures (unresolved titles, unknown item ids) and invalid
/// input rejected at a component boundary (negative playtimes, duplicate
/// keys, mismatched table sizes).
///
/// # Examples
///
/// ```
/// use recomendar::error::RecomendarError;
///
/// let err = RecomendarError::NotFound {
///     entity: "title".to_string(),
///     key: "Dust Racer 3".to_string(),
/// };
/// assert!(err.to_string().contains("not found"));
/// ```
#[derive(Debug)]
pub enum RecomendarError {
    /// Lookup key (title or item id) is absent from the catalog.
    NotFound {
        /// What was looked up (e.g. "title", "item")
        entity: String,
        /// The key that failed to resolve
        key: String,
    },

    /// Input rejected at a component boundary.
    InvalidInput {
        /// Field name
        field: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Vector/table dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RecomendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomendarError::NotFound { entity, key } => {
                write!(f, "{entity} not found: {key}")
            }
            RecomendarError::InvalidInput {
                field,
                value,
                constraint,
            } => {
                write!(f, "Invalid input: {field} = {value}, expected {constraint}")
            }
            RecomendarError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            RecomendarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RecomendarError {}

impl From<&str> for RecomendarError {
    fn from(msg: &str) -> Self {
        RecomendarError::Other(msg.to_string())
    }
}

impl From<String> for RecomendarError {
    fn from(msg: String) -> Self {
        RecomendarError::Other(msg)
    }
}

impl RecomendarError {
    /// Create a `NotFound` error for a lookup that failed to resolve.
    #[must_use]
    pub fn not_found(entity: &str, key: impl fmt::Display) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            key: key.to_string(),
        }
    }

    /// Create an `InvalidInput` error with field context.
    #[must_use]
    pub fn invalid_input(field: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecomendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RecomendarError::not_found("title", "Unknown Game");
        assert_eq!(err.to_string(), "title not found: Unknown Game");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = RecomendarError::invalid_input("playtime_forever", -5, ">= 0");
        let msg = err.to_string();
        assert!(msg.contains("playtime_forever"));
        assert!(msg.contains("-5"));
        assert!(msg.contains(">= 0"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = RecomendarError::DimensionMismatch {
            expected: "catalog=10".to_string(),
            actual: "vectors=8".to_string(),
        };
        assert!(err.to_string().contains("Dimension mismatch"));
        assert!(err.to_string().contains("catalog=10"));
    }

    #[test]
    fn test_from_str() {
        let err: RecomendarError = "test error".into();
        assert!(matches!(err, RecomendarError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: RecomendarError = "test error".to_string().into();
        assert!(matches!(err, RecomendarError::Other(_)));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_e: &E) {}
        assert_error(&RecomendarError::Other("x".to_string()));
    }
}
