//! Validation error types

use std::fmt;

/// Validation error for form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Field is not a whole number
    InvalidNumber { field: &'static str, value: String },

    /// Numeric field must be greater than zero
    NotPositive { field: &'static str, value: i32 },

    /// Request body or path could not be decoded
    InvalidFormat { field: &'static str, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} must be provided", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidNumber { field, value } => {
                write!(f, "invalid {}: '{}' is not a whole number", field, value)
            }
            Self::NotPositive { field, value } => {
                write!(f, "{} must be greater than zero, got {}", field, value)
            }
            Self::InvalidFormat { field, reason } => write!(f, "invalid {}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "name",
            max: 50,
        };
        assert_eq!(
            err.to_string(),
            "name exceeds maximum length of 50 characters"
        );

        let err = ValidationError::NotPositive {
            field: "level",
            value: -3,
        };
        assert_eq!(err.to_string(), "level must be greater than zero, got -3");
    }
}
