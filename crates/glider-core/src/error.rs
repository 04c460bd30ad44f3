//! Error types for glider telemetry processing
//!
//! Provides a unified error type for all glider crates.

use thiserror::Error;

/// Core error type for glider telemetry operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input sequences whose lengths must agree do not
    #[error("Shape mismatch in {context}: {left} vs {right}")]
    ShapeMismatch {
        context: String,
        left: usize,
        right: usize,
    },

    /// Joining two time-indexed streams whose index kinds differ
    #[error("Index type mismatch: {left} vs {right}")]
    IndexTypeMismatch { left: String, right: String },

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for mismatched sequence lengths
    pub fn shape_mismatch(context: &str, left: usize, right: usize) -> Self {
        Self::ShapeMismatch {
            context: context.to_string(),
            left,
            right,
        }
    }

    /// Create an error for mismatched time-index kinds
    pub fn index_type_mismatch(left: &str, right: &str) -> Self {
        Self::IndexTypeMismatch {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("threshold must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid parameter: threshold must be positive"
        );

        let err = Error::InvalidInput("index not sorted".to_string());
        assert_eq!(err.to_string(), "Invalid input: index not sorted");

        let err = Error::shape_mismatch("lon/lat track", 3, 4);
        assert_eq!(err.to_string(), "Shape mismatch in lon/lat track: 3 vs 4");

        let err = Error::index_type_mismatch("absolute", "relative");
        assert_eq!(err.to_string(), "Index type mismatch: absolute vs relative");

        let err = Error::InsufficientData {
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 samples, got 1"
        );

        let err = Error::Computation("midpoint out of range".to_string());
        assert_eq!(err.to_string(), "Computation error: midpoint out of range");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_input("vertical velocity");
        match err {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::shape_mismatch("columns", 100, 50);
        match err {
            Error::ShapeMismatch { left, right, .. } => {
                assert_eq!(left, 100);
                assert_eq!(right, 50);
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function(succeed: bool) -> Result<i32> {
            if succeed {
                Ok(42)
            } else {
                Err(Error::Computation("test failure".to_string()))
            }
        }

        assert_eq!(test_function(true).unwrap(), 42);
        assert!(test_function(false).is_err());
    }
}
