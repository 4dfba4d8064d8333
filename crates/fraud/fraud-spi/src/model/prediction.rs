//! Fraud prediction result types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Three-tier risk level attached to a fraud prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a fraud probability.
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.7 {
            RiskLevel::High
        } else if probability > 0.4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Four-tier band used by the risk-factor analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskBand {
    /// Classify a fraud probability.
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.8 {
            RiskBand::Critical
        } else if probability > 0.6 {
            RiskBand::High
        } else if probability > 0.3 {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }
}

/// Result of scoring one transaction against the fraud classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudPrediction {
    pub is_fraud: bool,
    pub fraud_probability: f64,
    pub risk_level: RiskLevel,
    /// Feature name to extracted value, as fed to the model.
    pub features: HashMap<String, f64>,
}

/// Boolean risk indicators derived from the transaction itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactors {
    pub high_amount: bool,
    pub unusual_location: bool,
    pub rapid_transaction: bool,
    pub device_mismatch: bool,
    pub high_velocity: bool,
    pub new_account: bool,
}

/// Risk-factor analysis layered on top of a fraud prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub band: RiskBand,
    /// Confidence in the verdict: max(p, 1 - p).
    pub confidence: f64,
    pub factors: RiskFactors,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_probability(0.95), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(0.7), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.41), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.4), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
    }

    #[test]
    fn test_risk_band_thresholds() {
        assert_eq!(RiskBand::from_probability(0.81), RiskBand::Critical);
        assert_eq!(RiskBand::from_probability(0.8), RiskBand::High);
        assert_eq!(RiskBand::from_probability(0.31), RiskBand::Medium);
        assert_eq!(RiskBand::from_probability(0.3), RiskBand::Low);
    }

    #[test]
    fn test_risk_level_serializes_uppercase() {
        let json = serde_json::to_string(&RiskLevel::High).unwrap();
        assert_eq!(json, "\"HIGH\"");
        let json = serde_json::to_string(&RiskBand::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
