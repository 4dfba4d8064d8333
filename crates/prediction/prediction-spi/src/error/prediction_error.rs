//! Predictive analytics error types.

use thiserror::Error;

/// Predictive analytics errors.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Invalid input: {name} - {reason}")]
    InvalidInput { name: String, reason: String },

    #[error("Simulation error: {0}")]
    SimulationError(String),
}

impl PredictionError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        PredictionError::InvalidInput {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for prediction operations.
pub type Result<T> = std::result::Result<T, PredictionError>;
