//! Fraud Detection Facade
//!
//! Unified re-exports for the fraud module.
//!
//! This facade provides access to all fraud detection components:
//! - feature extraction and transaction records
//! - the random-forest fraud classifier
//! - the isolation-forest anomaly detector and scaler
//! - the engine that trains, persists and serves both models

// Re-export everything from SPI (traits, errors, types)
pub use fraud_spi::*;

// Re-export everything from API (configs)
pub use fraud_api::*;

// Re-export everything from Core (implementations)
pub use fraud_core::*;
