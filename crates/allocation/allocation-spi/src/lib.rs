//! Asset Allocation Service Provider Interface
//!
//! Defines traits and types for asset-allocation planning.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::AllocationPlanner;
pub use error::{AllocationError, Result};
pub use model::{
    Allocation, AllocationPlan, AllocationProfile, MarketCondition, RiskTolerance,
};
