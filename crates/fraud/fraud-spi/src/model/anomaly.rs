//! Anomaly detection result types.

use serde::{Deserialize, Serialize};

/// Severity classification of an anomaly score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Classify an offset-adjusted anomaly score (lower is worse).
    pub fn from_score(score: f64) -> Self {
        if score < -0.3 {
            Severity::Critical
        } else if score < -0.1 {
            Severity::High
        } else if score < 0.1 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

/// Per-transaction result of batch anomaly detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyFinding {
    pub transaction_id: String,
    pub is_anomaly: bool,
    pub anomaly_score: f64,
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(Severity::from_score(-0.5), Severity::Critical);
        assert_eq!(Severity::from_score(-0.3), Severity::High);
        assert_eq!(Severity::from_score(-0.15), Severity::High);
        assert_eq!(Severity::from_score(0.0), Severity::Medium);
        assert_eq!(Severity::from_score(0.2), Severity::Low);
    }

    #[test]
    fn test_severity_serializes_uppercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
    }
}
