//! Risk Scoring Facade
//!
//! Unified re-exports for the risk module.
//!
//! This facade provides access to all risk analysis components:
//! - weighted risk scoring (score, level, factor breakdown)
//! - financial health reporting
//! - rule-based screening with severity-ranked findings

// Re-export everything from SPI (traits, errors, types)
pub use risk_spi::*;

// Re-export everything from API (configs)
pub use risk_api::*;

// Re-export everything from Core (implementations)
pub use risk_core::*;
