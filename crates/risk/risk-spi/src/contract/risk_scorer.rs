//! Risk scorer trait definition.

use crate::error::Result;
use crate::model::{FinancialSnapshot, HealthReport, RiskAssessment};

/// Risk scorer trait.
///
/// Implementations map a financial snapshot to a 0-100 risk score and its
/// derived views.
pub trait RiskScorer: Send + Sync {
    /// Full risk assessment: score, level and factor breakdown.
    fn score(&self, snapshot: &FinancialSnapshot) -> Result<RiskAssessment>;

    /// Financial health report: inverted score plus insights.
    fn health(&self, snapshot: &FinancialSnapshot) -> Result<HealthReport>;
}
