//! Crisis simulation types.

use serde::{Deserialize, Serialize};

use crate::error::{PredictionError, Result};

/// Four-tier risk rating used by simulations and analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskRating {
    Low,
    Medium,
    High,
    Critical,
}

/// Crisis scenario to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrisisScenario {
    JobLoss,
    MedicalEmergency,
    MarketCrash,
    InflationSpike,
    DebtCrisis,
    BusinessFailure,
}

/// Profile submitted for crisis simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisProfile {
    pub age: u32,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    /// Months of expenses the emergency fund covers.
    pub emergency_fund_months: f64,
    pub total_debt: f64,
    /// Job stability, 0-1.
    pub job_stability: f64,
    /// Skill relevance, 0-1.
    pub skills_relevance: f64,
    pub crisis_scenario: CrisisScenario,
    /// Crisis severity, 0-1.
    pub crisis_severity: f64,
}

impl CrisisProfile {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("monthly_income", self.monthly_income),
            ("monthly_expenses", self.monthly_expenses),
            ("emergency_fund_months", self.emergency_fund_months),
            ("total_debt", self.total_debt),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PredictionError::invalid(
                    name,
                    "must be a finite, non-negative number",
                ));
            }
        }
        if self.monthly_income <= 0.0 {
            return Err(PredictionError::invalid("monthly_income", "must be positive"));
        }
        if self.monthly_expenses <= 0.0 {
            return Err(PredictionError::invalid(
                "monthly_expenses",
                "must be positive",
            ));
        }
        for (name, value) in [
            ("job_stability", self.job_stability),
            ("skills_relevance", self.skills_relevance),
            ("crisis_severity", self.crisis_severity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PredictionError::invalid(name, "must be in [0, 1]"));
            }
        }
        Ok(())
    }
}

/// One month of the crisis projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyProjection {
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub cumulative_savings: f64,
}

/// Scenario parameters echoed back with the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioAnalysis {
    pub income_loss_percentage: f64,
    pub expense_increase_percentage: f64,
    pub crisis_duration_months: u32,
}

/// Result of a crisis simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisOutlook {
    pub survival_months: u32,
    pub worst_month: u32,
    pub worst_month_savings: f64,
    pub recovery_time_months: u32,
    pub risk_level: RiskRating,
    pub financial_stress_score: f64,
    /// First year of monthly projections.
    pub monthly_projections: Vec<MonthlyProjection>,
    pub recommendations: Vec<String>,
    pub scenario_analysis: ScenarioAnalysis,
}
