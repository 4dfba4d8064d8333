//! Scenario insight handlers: crisis simulation, income volatility,
//! rule-based financial screening.

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use prediction::{
    analyze_volatility, simulate_crisis, CrisisOutlook, CrisisProfile, VolatilityProfile,
    VolatilityReport,
};
use risk::{screen, ScreeningProfile, ScreeningReport, ScreeningThresholds};

use crate::error::ApiError;
use crate::routes::{round, timestamp};

#[derive(Debug, Serialize)]
pub struct CrisisSimulationResponse {
    #[serde(flatten)]
    pub outlook: CrisisOutlook,
    pub timestamp: String,
}

pub async fn crisis_simulation(
    Json(profile): Json<CrisisProfile>,
) -> Result<Json<CrisisSimulationResponse>, ApiError> {
    info!("simulating {:?} crisis", profile.crisis_scenario);

    let mut outlook = simulate_crisis(&profile)?;
    outlook.financial_stress_score = round(outlook.financial_stress_score, 3);
    outlook.worst_month_savings = round(outlook.worst_month_savings, 2);

    Ok(Json(CrisisSimulationResponse {
        outlook,
        timestamp: timestamp(),
    }))
}

#[derive(Debug, Serialize)]
pub struct VolatilityResponse {
    #[serde(flatten)]
    pub report: VolatilityReport,
    pub timestamp: String,
}

pub async fn income_volatility(
    Json(profile): Json<VolatilityProfile>,
) -> Result<Json<VolatilityResponse>, ApiError> {
    info!("analysing income volatility for industry: {}", profile.industry);

    let mut report = analyze_volatility(&profile)?;
    report.volatility_score = round(report.volatility_score, 3);
    report.layoff_risk_score = round(report.layoff_risk_score, 3);
    report.predicted_income_range.monthly_low =
        round(report.predicted_income_range.monthly_low, 2);
    report.predicted_income_range.monthly_high =
        round(report.predicted_income_range.monthly_high, 2);

    Ok(Json(VolatilityResponse {
        report,
        timestamp: timestamp(),
    }))
}

#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    #[serde(flatten)]
    pub report: ScreeningReport,
    pub timestamp: String,
}

pub async fn financial_screening(
    Json(profile): Json<ScreeningProfile>,
) -> Result<Json<ScreeningResponse>, ApiError> {
    let mut report = screen(&profile, &ScreeningThresholds::default())?;
    report.anomaly_score = round(report.anomaly_score, 3);

    Ok(Json(ScreeningResponse {
        report,
        timestamp: timestamp(),
    }))
}

/// Status of the rule-based insight engines.
pub async fn model_status() -> Json<Value> {
    Json(json!({
        "crisis_simulation": {
            "loaded": true,
            "model_type": "Rule-based + Statistical",
            "scenarios": [
                "job_loss", "medical_emergency", "market_crash",
                "inflation_spike", "debt_crisis", "business_failure"
            ]
        },
        "income_volatility": {
            "loaded": true,
            "model_type": "Statistical Analysis",
            "factors": ["job_stability", "automation_risk", "industry_risk", "skill_relevance"]
        },
        "financial_screening": {
            "loaded": true,
            "model_type": "Statistical + Rule-based",
            "checks": ["emergency_fund", "debt_ratio", "savings_rate", "financial_stress"]
        },
        "timestamp": timestamp(),
    }))
}
