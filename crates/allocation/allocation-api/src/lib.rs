//! Asset Allocation API
//!
//! Configuration types for allocation planning.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use allocation_spi::{Allocation, AllocationError, Result};

/// Allocation planner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Starting split before adjustment rules run.
    pub base: Allocation,
    /// Emergency-fund coverage target in months.
    pub emergency_target_months: f64,
    /// Confidence reported with every plan.
    pub confidence: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base: Allocation {
                sip_percentage: 30.0,
                stocks_percentage: 15.0,
                bonds_percentage: 20.0,
                lifestyle_percentage: 25.0,
                emergency_fund_percentage: 10.0,
            },
            emergency_target_months: 6.0,
            confidence: 0.85,
        }
    }
}
