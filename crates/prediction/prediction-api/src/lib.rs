//! Predictive Analytics API
//!
//! Configuration types for predictions and simulations.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use prediction_spi::{PredictionError, Result};

// ============================================================================
// Survival Model Configuration
// ============================================================================

/// Rule parameters of the survival-probability model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurvivalConfig {
    /// Starting probability before deductions.
    pub base_probability: f64,
    /// Floor applied after deductions.
    pub floor: f64,
    /// Deduction when emergency coverage is under 3 months.
    pub emergency_penalty: f64,
    /// Deduction when the debt ratio exceeds 0.5.
    pub debt_penalty: f64,
    /// Deduction when the savings rate is under 10.
    pub savings_penalty: f64,
}

impl Default for SurvivalConfig {
    fn default() -> Self {
        Self {
            base_probability: 0.8,
            floor: 0.1,
            emergency_penalty: 0.2,
            debt_penalty: 0.15,
            savings_penalty: 0.1,
        }
    }
}

// ============================================================================
// Monte Carlo Configuration
// ============================================================================

/// What-if simulation configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WhatIfConfig {
    /// Base RNG seed; each run derives its own stream from it.
    pub seed: u64,
}

impl Default for WhatIfConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}
