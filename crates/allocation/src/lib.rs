//! Asset Allocation Facade
//!
//! Unified re-exports for the allocation module.
//!
//! This facade provides access to all allocation components:
//! - the financial profile and plan models
//! - the heuristic planner with its adjustment rules

// Re-export everything from SPI (traits, errors, types)
pub use allocation_spi::*;

// Re-export everything from API (configs)
pub use allocation_api::*;

// Re-export everything from Core (implementations)
pub use allocation_core::*;
