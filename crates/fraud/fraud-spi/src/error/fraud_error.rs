//! Fraud detection error types.

use thiserror::Error;

/// Fraud detection errors.
#[derive(Debug, Error)]
pub enum FraudError {
    #[error("Insufficient data: required {required}, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("Model not trained: call fit() or load saved models first")]
    NotTrained,

    #[error("Feature dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Model store error: {0}")]
    Store(String),

    #[error("Training error: {0}")]
    TrainingError(String),
}

/// Result type for fraud detection operations.
pub type Result<T> = std::result::Result<T, FraudError>;
