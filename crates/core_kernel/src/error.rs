//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A required argument was not supplied
    #[error("Null argument: {0} is required")]
    NullArgument(String),

    /// An argument was supplied but violates a domain rule
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An attribute exists under the key name but holds another kind of value
    #[error("Type mismatch for attribute {key}: expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
    },
}

impl CoreError {
    pub fn null_argument(field: impl Into<String>) -> Self {
        CoreError::NullArgument(field.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CoreError::InvalidArgument(message.into())
    }

    /// Returns true if the error describes a malformed request rather than missing data
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            CoreError::NullArgument(_) | CoreError::InvalidArgument(_)
        )
    }
}
