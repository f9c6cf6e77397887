//! Custom error types for Coinwise
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Coinwise operations
#[derive(Error, Debug)]
pub enum CoinwiseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Caller-facing validation errors (bad amounts, blank fields, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A contract the caller was required to uphold has been broken.
    ///
    /// This is never a recoverable runtime case; callers should surface it
    /// as a bug rather than show a derived number.
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

impl CoinwiseError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an invariant violation
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}

impl From<std::io::Error> for CoinwiseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CoinwiseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Coinwise operations
pub type CoinwiseResult<T> = Result<T, CoinwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoinwiseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_error() {
        let err = CoinwiseError::Validation("Amount must be positive".into());
        assert_eq!(err.to_string(), "Validation error: Amount must be positive");
        assert!(err.is_validation());
        assert!(!err.is_invariant_violation());
    }

    #[test]
    fn test_invariant_violation() {
        let err = CoinwiseError::InvariantViolation("budget amount is zero".into());
        assert!(err.is_invariant_violation());
        assert_eq!(err.to_string(), "Invariant violated: budget amount is zero");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoinwiseError = io_err.into();
        assert!(matches!(err, CoinwiseError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoinwiseError = json_err.into();
        assert!(matches!(err, CoinwiseError::Json(_)));
    }
}
