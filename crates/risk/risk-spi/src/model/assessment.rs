//! Risk assessment result types.

use serde::{Deserialize, Serialize};

/// Risk level classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a 0-100 risk score.
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            RiskLevel::Low
        } else if score < 70.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Factor breakdown behind a risk score, as percentages of income.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskFactors {
    pub expense_ratio: f64,
    pub savings_ratio: f64,
    pub debt_ratio: f64,
}

/// Result of scoring a financial snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 0 = low risk, 100 = high risk.
    pub risk_score: f64,
    pub level: RiskLevel,
    pub factors: RiskFactors,
}

/// Financial health view: the inverse of risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// 0 = poor health, 100 = excellent.
    pub health_score: f64,
    pub risk_level: RiskLevel,
    pub insights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(29.9), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(69.9), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(70.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100.0), RiskLevel::High);
    }
}
