//! Health insight strings keyed off the risk score.

use risk_spi::RiskLevel;

/// Insight lines for a given risk score.
pub fn health_insights(risk_score: f64) -> Vec<String> {
    match RiskLevel::from_score(risk_score) {
        RiskLevel::High => vec![
            "High risk score indicates potential financial stress".to_string(),
            "Consider reducing debt and expenses".to_string(),
        ],
        RiskLevel::Medium => vec!["Moderate risk, monitor expenses closely".to_string()],
        RiskLevel::Low => vec!["Good financial health".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_count_per_level() {
        assert_eq!(health_insights(85.0).len(), 2);
        assert_eq!(health_insights(50.0).len(), 1);
        assert_eq!(health_insights(10.0).len(), 1);
    }
}
