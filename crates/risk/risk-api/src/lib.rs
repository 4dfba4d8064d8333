//! Risk Scoring API
//!
//! Configuration types for risk scoring and screening.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use risk_spi::{Result, RiskError};

// ============================================================================
// Scoring Configuration
// ============================================================================

/// Weights of the risk score's linear combination.
///
/// `score = expense_ratio * expense + (1 - savings_ratio) * savings +
/// debt_ratio * debt`, scaled to 0-100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskWeights {
    pub expense: f64,
    pub savings: f64,
    pub debt: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            expense: 0.5,
            savings: 0.3,
            debt: 0.2,
        }
    }
}

// ============================================================================
// Screening Configuration
// ============================================================================

/// Thresholds used by the rule-based financial screening.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreeningThresholds {
    /// Findings fire below this emergency coverage (months).
    pub emergency_months_min: f64,
    /// Below this coverage the finding is high severity.
    pub emergency_months_critical: f64,
    /// Findings fire above this debt-to-income ratio.
    pub debt_ratio_max: f64,
    /// Above this ratio the finding is critical.
    pub debt_ratio_critical: f64,
    /// Findings fire below this savings rate.
    pub savings_rate_min: f64,
    /// Findings fire above this stress score.
    pub stress_max: f64,
    /// Above this stress the finding is high severity.
    pub stress_high: f64,
}

impl Default for ScreeningThresholds {
    fn default() -> Self {
        Self {
            emergency_months_min: 3.0,
            emergency_months_critical: 1.0,
            debt_ratio_max: 0.5,
            debt_ratio_critical: 0.7,
            savings_rate_min: 0.1,
            stress_max: 0.7,
            stress_high: 0.8,
        }
    }
}
