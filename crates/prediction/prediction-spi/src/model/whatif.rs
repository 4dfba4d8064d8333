//! What-if Monte Carlo simulation types.

use serde::{Deserialize, Serialize};

use crate::error::{PredictionError, Result};

/// User risk tolerance; sets the return/volatility assumptions of the
/// simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

/// Probabilistic scenario knobs; absent scenarios do not fire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhatIfScenarios {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_loss: Option<JobLossScenario>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raise: Option<RaiseScenario>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_increase: Option<ExpenseIncreaseScenario>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_return: Option<InvestmentReturnScenario>,
}

/// Chance per simulated year of losing all income for a stretch of months.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JobLossScenario {
    pub probability: f64,
    pub duration_months: u32,
}

/// Chance per simulated year of a persistent raise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RaiseScenario {
    pub percentage: f64,
    pub probability: f64,
}

/// Chance per simulated year of a persistent expense increase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExpenseIncreaseScenario {
    pub percentage: f64,
    pub probability: f64,
}

/// Override of the tolerance-implied mean annual return.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InvestmentReturnScenario {
    pub annual_return: f64,
}

/// What-if simulation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatIfRequest {
    pub current_income: f64,
    pub current_expenses: f64,
    pub current_savings: f64,
    pub current_debt: f64,
    pub age: u32,
    pub risk_tolerance: RiskTolerance,
    #[serde(default)]
    pub scenarios: WhatIfScenarios,
    #[serde(default = "default_years")]
    pub simulation_years: u32,
    #[serde(default = "default_simulations")]
    pub num_simulations: u32,
}

fn default_years() -> u32 {
    10
}

fn default_simulations() -> u32 {
    1000
}

impl WhatIfRequest {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("current_income", self.current_income),
            ("current_expenses", self.current_expenses),
            ("current_savings", self.current_savings),
            ("current_debt", self.current_debt),
        ] {
            if !value.is_finite() || !(0.0..=1e10).contains(&value) {
                return Err(PredictionError::invalid(
                    name,
                    "must be non-negative and reasonable",
                ));
            }
        }
        if self.current_income <= 0.0 {
            return Err(PredictionError::invalid("current_income", "must be positive"));
        }
        if !(18..=100).contains(&self.age) {
            return Err(PredictionError::invalid("age", "must be between 18 and 100"));
        }
        if !(1..=30).contains(&self.simulation_years) {
            return Err(PredictionError::invalid(
                "simulation_years",
                "must be between 1 and 30",
            ));
        }
        if !(100..=10_000).contains(&self.num_simulations) {
            return Err(PredictionError::invalid(
                "num_simulations",
                "must be between 100 and 10000",
            ));
        }
        Ok(())
    }
}

/// Net-worth percentile band for one simulated year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YearBand {
    pub year: u32,
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

/// What-if simulation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatIfOutcome {
    pub net_worth_projection: Vec<YearBand>,
    /// Fraction of runs that never went insolvent.
    pub survival_probability: f64,
    pub average_net_worth: f64,
    pub median_net_worth: f64,
    pub worst_case_net_worth: f64,
    pub best_case_net_worth: f64,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_on_deserialize() {
        let request: WhatIfRequest = serde_json::from_str(
            r#"{
                "current_income": 5000,
                "current_expenses": 3000,
                "current_savings": 10000,
                "current_debt": 0,
                "age": 35,
                "risk_tolerance": "medium"
            }"#,
        )
        .unwrap();
        assert_eq!(request.simulation_years, 10);
        assert_eq!(request.num_simulations, 1000);
        assert!(request.scenarios.job_loss.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_simulation_bounds() {
        let mut request: WhatIfRequest = serde_json::from_str(
            r#"{
                "current_income": 5000,
                "current_expenses": 3000,
                "current_savings": 10000,
                "current_debt": 0,
                "age": 35,
                "risk_tolerance": "low",
                "num_simulations": 50
            }"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
        request.num_simulations = 100;
        assert!(request.validate().is_ok());
    }
}
