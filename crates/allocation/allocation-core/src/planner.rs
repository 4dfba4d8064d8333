//! Heuristic allocation planner.

use allocation_api::PlannerConfig;
use allocation_spi::{
    AllocationPlan, AllocationPlanner, AllocationProfile, MarketCondition, Result, RiskTolerance,
};

/// Multi-factor allocation planner.
///
/// Starts from the configured base split and applies life-cycle, risk
/// tolerance, job stability, market and debt adjustments in a fixed order,
/// recording one reasoning line per applied rule.
#[derive(Debug, Clone, Default)]
pub struct HeuristicPlanner {
    config: PlannerConfig,
}

impl HeuristicPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }
}

impl AllocationPlanner for HeuristicPlanner {
    fn optimize(&self, profile: &AllocationProfile) -> Result<AllocationPlan> {
        profile.validate()?;

        let mut allocation = self.config.base;
        let mut reasoning = Vec::new();

        // Age-based adjustment (life-cycle investing)
        if profile.age < 30 {
            allocation.sip_percentage += 5.0;
            allocation.stocks_percentage += 3.0;
            allocation.lifestyle_percentage -= 8.0;
            reasoning.push("Age < 30: Increased long-term investment allocation".to_string());
        } else if profile.age > 50 {
            allocation.sip_percentage -= 5.0;
            allocation.stocks_percentage -= 5.0;
            allocation.bonds_percentage += 10.0;
            reasoning.push("Age > 50: More conservative allocation".to_string());
        }

        // Risk tolerance adjustment
        match profile.risk_tolerance {
            RiskTolerance::Low => {
                allocation.stocks_percentage = (allocation.stocks_percentage - 5.0).max(10.0);
                allocation.bonds_percentage += 5.0;
                reasoning.push("Low risk tolerance: Conservative allocation".to_string());
            }
            RiskTolerance::High => {
                allocation.stocks_percentage = (allocation.stocks_percentage + 5.0).min(20.0);
                allocation.bonds_percentage -= 5.0;
                reasoning.push("High risk tolerance: Aggressive allocation".to_string());
            }
            RiskTolerance::Medium => {}
        }

        // Job stability adjustment
        if profile.job_stability < 5.0 {
            allocation.emergency_fund_percentage += 5.0;
            allocation.lifestyle_percentage -= 5.0;
            reasoning.push("Low job stability: Prioritize emergency fund".to_string());
        }

        // Market condition adjustment
        match profile.market_conditions {
            MarketCondition::Bull => {
                allocation.stocks_percentage += 3.0;
                allocation.bonds_percentage -= 3.0;
                reasoning.push("Bull market: Increased equity exposure".to_string());
            }
            MarketCondition::Bear => {
                allocation.stocks_percentage -= 3.0;
                allocation.bonds_percentage += 3.0;
                reasoning.push("Bear market: Reduced equity exposure".to_string());
            }
            MarketCondition::Neutral => {}
        }

        // Emergency fund adequacy check
        let current_months = profile.emergency_fund_months();
        let target_months = self.config.emergency_target_months;
        if current_months < target_months {
            let additional = ((target_months - current_months) * 2.0).min(10.0);
            allocation.emergency_fund_percentage += additional;
            allocation.lifestyle_percentage -= additional;
            let months_needed = ((target_months - current_months) * 10.0).round() / 10.0;
            reasoning.push(format!(
                "Emergency fund needs {months_needed} months coverage"
            ));
        }

        // Debt burden assessment
        let debt_to_income = if profile.income > 0.0 {
            profile.debt / (profile.income * 12.0)
        } else {
            1.0
        };
        if debt_to_income > 0.5 {
            allocation.lifestyle_percentage -= 5.0;
            allocation.emergency_fund_percentage += 5.0;
            reasoning.push("High debt burden: Conservative spending".to_string());
        }

        allocation.normalize();

        Ok(AllocationPlan {
            allocation,
            reasoning,
            confidence: self.config.confidence,
            market_context: profile.market_conditions.as_str().to_string(),
            risk_adjustment: profile.risk_tolerance.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AllocationProfile {
        AllocationProfile {
            income: 50_000.0,
            expenses: 30_000.0,
            emergency_fund: 180_000.0,
            debt: 10_000.0,
            age: 35,
            risk_tolerance: RiskTolerance::Medium,
            job_stability: 8.0,
            market_conditions: MarketCondition::Neutral,
            inflation_rate: 3.5,
        }
    }

    #[test]
    fn test_neutral_profile_keeps_base_split() {
        let plan = HeuristicPlanner::default().optimize(&profile()).unwrap();
        // No rules fired: base split already sums to 100.
        assert!(plan.reasoning.is_empty());
        assert!((plan.allocation.sip_percentage - 30.0).abs() < 1e-9);
        assert!((plan.allocation.total() - 100.0).abs() < 1e-9);
        assert_eq!(plan.market_context, "neutral");
        assert_eq!(plan.risk_adjustment, "medium");
    }

    #[test]
    fn test_young_aggressive_bull_profile() {
        let mut p = profile();
        p.age = 25;
        p.risk_tolerance = RiskTolerance::High;
        p.market_conditions = MarketCondition::Bull;

        let plan = HeuristicPlanner::default().optimize(&p).unwrap();
        assert_eq!(plan.reasoning.len(), 3);
        assert!(plan.allocation.stocks_percentage > plan.allocation.bonds_percentage);
        assert!((plan.allocation.total() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_older_conservative_profile_prefers_bonds() {
        let mut p = profile();
        p.age = 60;
        p.risk_tolerance = RiskTolerance::Low;
        p.market_conditions = MarketCondition::Bear;

        let plan = HeuristicPlanner::default().optimize(&p).unwrap();
        assert!(plan.allocation.bonds_percentage > plan.allocation.stocks_percentage);
        assert!(plan
            .reasoning
            .iter()
            .any(|r| r.contains("conservative allocation")
                || r.contains("Conservative allocation")));
    }

    #[test]
    fn test_thin_emergency_fund_shifts_from_lifestyle() {
        let mut p = profile();
        p.emergency_fund = 30_000.0; // one month of coverage

        let base = HeuristicPlanner::default().optimize(&profile()).unwrap();
        let plan = HeuristicPlanner::default().optimize(&p).unwrap();
        assert!(
            plan.allocation.emergency_fund_percentage
                > base.allocation.emergency_fund_percentage
        );
        assert!(plan.allocation.lifestyle_percentage < base.allocation.lifestyle_percentage);
        assert!(plan
            .reasoning
            .iter()
            .any(|r| r.contains("Emergency fund needs")));
    }

    #[test]
    fn test_heavy_debt_flags_conservative_spending() {
        let mut p = profile();
        p.debt = 400_000.0; // > half of annual income

        let plan = HeuristicPlanner::default().optimize(&p).unwrap();
        assert!(plan
            .reasoning
            .iter()
            .any(|r| r.contains("High debt burden")));
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let mut p = profile();
        p.job_stability = 0.0;
        assert!(HeuristicPlanner::default().optimize(&p).is_err());
    }
}
