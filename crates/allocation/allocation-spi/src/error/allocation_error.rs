//! Asset allocation error types.

use thiserror::Error;

/// Asset allocation errors.
#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("Invalid input: {name} - {reason}")]
    InvalidInput { name: String, reason: String },
}

impl AllocationError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        AllocationError::InvalidInput {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for allocation operations.
pub type Result<T> = std::result::Result<T, AllocationError>;
