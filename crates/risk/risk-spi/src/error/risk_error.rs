//! Risk scoring error types.

use thiserror::Error;

/// Risk scoring errors.
#[derive(Debug, Error)]
pub enum RiskError {
    #[error("Invalid input: {name} - {reason}")]
    InvalidInput { name: String, reason: String },
}

impl RiskError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        RiskError::InvalidInput {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for risk scoring operations.
pub type Result<T> = std::result::Result<T, RiskError>;
