//! Income volatility analysis types.

use serde::{Deserialize, Serialize};

use crate::error::{PredictionError, Result};
use crate::model::RiskRating;

/// Profile submitted for income volatility analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolatilityProfile {
    pub age: u32,
    pub education: String,
    pub industry: String,
    pub experience_years: f64,
    /// Monthly base salary.
    pub base_salary: f64,
    /// Variable share of income, 0-1.
    pub variable_income_ratio: f64,
    /// Job stability score, 0-1.
    pub job_stability_score: f64,
    /// Automation risk score, 0-1.
    pub automation_risk_score: f64,
    /// Skill relevance score, 0-1.
    pub skill_relevance_score: f64,
}

impl VolatilityProfile {
    pub fn validate(&self) -> Result<()> {
        if !self.base_salary.is_finite() || self.base_salary <= 0.0 {
            return Err(PredictionError::invalid("base_salary", "must be positive"));
        }
        if !self.experience_years.is_finite() || self.experience_years < 0.0 {
            return Err(PredictionError::invalid(
                "experience_years",
                "must be non-negative",
            ));
        }
        for (name, value) in [
            ("variable_income_ratio", self.variable_income_ratio),
            ("job_stability_score", self.job_stability_score),
            ("automation_risk_score", self.automation_risk_score),
            ("skill_relevance_score", self.skill_relevance_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PredictionError::invalid(name, "must be in [0, 1]"));
            }
        }
        Ok(())
    }
}

/// Predicted monthly income band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeRange {
    pub monthly_low: f64,
    pub monthly_high: f64,
    pub confidence: f64,
}

/// Factor values behind the volatility score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityFactors {
    pub job_stability: f64,
    pub automation_risk: f64,
    pub industry_risk: f64,
    pub skill_relevance: f64,
    pub education_stability: f64,
}

/// Industry outlook attached to the analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerInsights {
    pub industry_growth_rate: f64,
    pub industry_automation_risk: f64,
    pub future_outlook: String,
    pub skill_alignment: String,
    pub automation_vulnerability: String,
}

/// Result of income volatility analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolatilityReport {
    pub volatility_score: f64,
    pub risk_level: RiskRating,
    pub predicted_income_range: IncomeRange,
    pub layoff_risk_score: f64,
    pub stability_factors: StabilityFactors,
    pub recommendations: Vec<String>,
    pub career_insights: CareerInsights,
}
