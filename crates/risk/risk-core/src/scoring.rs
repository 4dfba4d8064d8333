//! Weighted risk score implementation.

use risk_api::RiskWeights;
use risk_spi::{
    FinancialSnapshot, HealthReport, Result, RiskAssessment, RiskFactors, RiskLevel, RiskScorer,
};

use crate::health::health_insights;

/// Multi-factor weighted risk scorer.
#[derive(Debug, Clone, Default)]
pub struct WeightedRiskScorer {
    weights: RiskWeights,
}

impl WeightedRiskScorer {
    pub fn new(weights: RiskWeights) -> Self {
        Self { weights }
    }
}

impl RiskScorer for WeightedRiskScorer {
    fn score(&self, snapshot: &FinancialSnapshot) -> Result<RiskAssessment> {
        snapshot.validate()?;
        let score = risk_score(snapshot, &self.weights);
        Ok(RiskAssessment {
            risk_score: score,
            level: RiskLevel::from_score(score),
            factors: risk_factors(snapshot),
        })
    }

    fn health(&self, snapshot: &FinancialSnapshot) -> Result<HealthReport> {
        snapshot.validate()?;
        let score = risk_score(snapshot, &self.weights);
        let health_score = (100.0 - score).clamp(0.0, 100.0);
        Ok(HealthReport {
            health_score,
            risk_level: RiskLevel::from_score(score),
            insights: health_insights(score),
        })
    }
}

fn ratios(snapshot: &FinancialSnapshot) -> (f64, f64, f64) {
    if snapshot.income > 0.0 {
        (
            snapshot.expenses / snapshot.income,
            snapshot.savings / snapshot.income,
            snapshot.debt / snapshot.income,
        )
    } else {
        // Without income, spending and debt dominate and savings count for
        // nothing.
        (1.0, 0.0, 1.0)
    }
}

/// Weighted risk score in [0, 100].
///
/// Each ratio is capped at 1 before weighting so a single runaway factor
/// cannot push the score past its weight's share.
pub fn risk_score(snapshot: &FinancialSnapshot, weights: &RiskWeights) -> f64 {
    let (expense_ratio, savings_ratio, debt_ratio) = ratios(snapshot);
    let raw = expense_ratio.min(1.0) * weights.expense
        + (1.0 - savings_ratio.min(1.0)) * weights.savings
        + debt_ratio.min(1.0) * weights.debt;
    (raw * 100.0).clamp(0.0, 100.0)
}

/// Factor breakdown as percentages of income.
pub fn risk_factors(snapshot: &FinancialSnapshot) -> RiskFactors {
    let (expense_ratio, savings_ratio, debt_ratio) = ratios(snapshot);
    RiskFactors {
        expense_ratio: expense_ratio * 100.0,
        savings_ratio: savings_ratio * 100.0,
        debt_ratio: debt_ratio * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> FinancialSnapshot {
        FinancialSnapshot {
            income: 50_000.0,
            expenses: 30_000.0,
            savings: 10_000.0,
            debt: 5_000.0,
        }
    }

    #[test]
    fn test_reference_snapshot_score() {
        // expense 0.6 * 0.5 + (1 - 0.2) * 0.3 + 0.1 * 0.2 = 0.56
        let score = risk_score(&snapshot(), &RiskWeights::default());
        assert!((score - 56.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_clamped() {
        let stressed = FinancialSnapshot {
            income: 1_000.0,
            expenses: 10_000.0,
            savings: 0.0,
            debt: 50_000.0,
        };
        let score = risk_score(&stressed, &RiskWeights::default());
        assert!((score - 100.0).abs() < 1e-9);

        let comfortable = FinancialSnapshot {
            income: 10_000.0,
            expenses: 0.0,
            savings: 50_000.0,
            debt: 0.0,
        };
        let score = risk_score(&comfortable, &RiskWeights::default());
        assert!(score.abs() < 1e-9);
    }

    #[test]
    fn test_factors_are_percentages() {
        let factors = risk_factors(&snapshot());
        assert!((factors.expense_ratio - 60.0).abs() < 1e-9);
        assert!((factors.savings_ratio - 20.0).abs() < 1e-9);
        assert!((factors.debt_ratio - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_scorer_levels() {
        let scorer = WeightedRiskScorer::default();
        let assessment = scorer.score(&snapshot()).unwrap();
        assert_eq!(assessment.level, RiskLevel::Medium);

        let health = scorer.health(&snapshot()).unwrap();
        assert!((health.health_score - 44.0).abs() < 1e-9);
        assert_eq!(health.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_scorer_rejects_invalid_input() {
        let scorer = WeightedRiskScorer::default();
        let mut bad = snapshot();
        bad.debt = f64::INFINITY;
        assert!(scorer.score(&bad).is_err());
    }
}
