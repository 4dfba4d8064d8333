//! Risk Scoring Service Provider Interface
//!
//! Defines traits and types for rule-based financial risk analysis.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::RiskScorer;
pub use error::{Result, RiskError};
pub use model::{
    FinancialSnapshot, HealthIndicators, HealthReport, RiskAssessment, RiskFactors, RiskLevel,
    ScreeningFinding, ScreeningProfile, ScreeningReport, Severity,
};
