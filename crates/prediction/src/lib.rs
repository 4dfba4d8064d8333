//! Predictive Analytics Facade
//!
//! Unified re-exports for the prediction module.
//!
//! This facade provides access to all predictive analytics components:
//! - per-kind prediction models (survival, layoff risk, savings trajectory)
//! - crisis scenario simulation
//! - income volatility analysis
//! - the what-if Monte Carlo simulator

// Re-export everything from SPI (traits, errors, types)
pub use prediction_spi::*;

// Re-export everything from API (configs)
pub use prediction_api::*;

// Re-export everything from Core (implementations)
pub use prediction_core::*;
