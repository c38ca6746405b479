//! Unified error handling for the route-profile library.
//!
//! Every fallible operation (payload decoding, option parsing) reports a
//! [`ProfileError`]. Failures are local to one route view: callers log them
//! and skip rendering.

use std::fmt;

/// Unified error type for route-profile operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// Payload is not valid JSON or not one of the accepted route shapes
    Parse { message: String },
    /// A coordinate tuple has the wrong arity or an unusable value
    InvalidCoordinates { index: usize, message: String },
    /// View options could not be decoded
    ConfigError { message: String },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::Parse { message } => {
                write!(f, "Route payload parse error: {}", message)
            }
            ProfileError::InvalidCoordinates { index, message } => {
                write!(f, "Route point {} is invalid: {}", index, message)
            }
            ProfileError::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
        }
    }
}

impl std::error::Error for ProfileError {}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        ProfileError::Parse {
            message: err.to_string(),
        }
    }
}

/// Result type alias for route-profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProfileError::InvalidCoordinates {
            index: 4,
            message: "expected 2 or 3 values, got 1".to_string(),
        };
        assert!(err.to_string().contains("point 4"));
        assert!(err.to_string().contains("got 1"));
    }

    #[test]
    fn test_from_serde_error() {
        let json_err = serde_json::from_str::<Vec<f64>>("[1,").unwrap_err();
        let err: ProfileError = json_err.into();
        assert!(matches!(err, ProfileError::Parse { .. }));
    }
}
