//! Prediction kinds, horizons and results.

use serde::{Deserialize, Serialize};

/// Type of predictive analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionKind {
    SurvivalProbability,
    LayoffRisk,
    SavingsTrajectory,
}

/// Time horizon for predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeHorizon {
    #[serde(rename = "30day")]
    ShortTerm,
    #[serde(rename = "60day")]
    MidTerm,
    #[serde(rename = "90day")]
    LongTerm,
}

impl TimeHorizon {
    pub fn days(&self) -> u32 {
        match self {
            TimeHorizon::ShortTerm => 30,
            TimeHorizon::MidTerm => 60,
            TimeHorizon::LongTerm => 90,
        }
    }

    pub fn months(&self) -> u32 {
        self.days() / 30
    }
}

/// Result of a predictive analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub prediction_type: PredictionKind,
    pub time_horizon: TimeHorizon,
    pub predicted_value: f64,
    pub confidence_score: f64,
    pub factors: Vec<String>,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_formats() {
        let json = serde_json::to_string(&PredictionKind::LayoffRisk).unwrap();
        assert_eq!(json, "\"layoff_risk\"");
        let horizon: TimeHorizon = serde_json::from_str("\"90day\"").unwrap();
        assert_eq!(horizon, TimeHorizon::LongTerm);
        assert_eq!(horizon.months(), 3);
    }
}
