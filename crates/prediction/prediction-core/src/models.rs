//! Per-kind prediction models.

use prediction_api::SurvivalConfig;
use prediction_spi::{
    Prediction, PredictionKind, PredictiveModel, Result, TimeHorizon, UserData,
};

/// Rule-based survival probability model.
#[derive(Debug, Clone, Default)]
pub struct SurvivalModel {
    config: SurvivalConfig,
}

impl SurvivalModel {
    pub fn new(config: SurvivalConfig) -> Self {
        Self { config }
    }
}

impl PredictiveModel for SurvivalModel {
    fn kind(&self) -> PredictionKind {
        PredictionKind::SurvivalProbability
    }

    fn predict(&self, data: &UserData, horizon: TimeHorizon) -> Result<Prediction> {
        let emergency_months = data.bounded_number("emergency_months", 0.0, 0.0)?;
        let debt_ratio = data.bounded_number("debt_ratio", 0.0, 0.0)?;
        let savings_rate = data.bounded_number("savings_rate", 0.0, 0.0)?;

        let mut probability = self.config.base_probability;
        let mut factors = Vec::new();

        if emergency_months < 3.0 {
            probability -= self.config.emergency_penalty;
            factors.push("Low emergency fund".to_string());
        }
        if debt_ratio > 0.5 {
            probability -= self.config.debt_penalty;
            factors.push("High debt ratio".to_string());
        }
        if savings_rate < 10.0 {
            probability -= self.config.savings_penalty;
            factors.push("Low savings rate".to_string());
        }

        if factors.is_empty() {
            factors.push("Financial data analyzed".to_string());
        }

        Ok(Prediction {
            prediction_type: self.kind(),
            time_horizon: horizon,
            predicted_value: probability.max(self.config.floor),
            confidence_score: 0.75,
            factors,
            recommendations: vec![
                "Build emergency fund to 6 months".to_string(),
                "Reduce debt-to-income ratio below 50%".to_string(),
                "Increase savings rate to 20%+".to_string(),
            ],
        })
    }
}

/// Industry/experience layoff risk model.
#[derive(Debug, Clone, Default)]
pub struct LayoffModel;

/// Base layoff risk by industry.
fn industry_base_risk(industry: &str) -> f64 {
    match industry.to_lowercase().as_str() {
        "technology" | "tech" | "it" => 0.35,
        "healthcare" => 0.15,
        "finance" => 0.25,
        "manufacturing" => 0.30,
        "retail" => 0.40,
        "education" => 0.10,
        "government" => 0.05,
        "gig_economy" => 0.60,
        _ => 0.25,
    }
}

impl PredictiveModel for LayoffModel {
    fn kind(&self) -> PredictionKind {
        PredictionKind::LayoffRisk
    }

    fn predict(&self, data: &UserData, horizon: TimeHorizon) -> Result<Prediction> {
        let industry = data.string_or("industry", "IT");
        let experience_years = data.bounded_number("experience_years", 1.0, 0.0)?;

        // Experience halves the base industry risk at twenty years.
        let experience_factor = (experience_years / 20.0).min(1.0);
        let risk = industry_base_risk(&industry) * (1.0 - 0.5 * experience_factor);

        Ok(Prediction {
            prediction_type: self.kind(),
            time_horizon: horizon,
            predicted_value: risk.clamp(0.01, 0.99),
            confidence_score: 0.7,
            factors: vec![
                format!("Industry: {industry}"),
                format!("Experience: {experience_years} years"),
            ],
            recommendations: vec![
                "Build emergency fund (6-12 months)".to_string(),
                "Diversify income sources".to_string(),
                "Update resume and professional skills".to_string(),
                "Network actively in your industry".to_string(),
            ],
        })
    }
}

/// Compound-growth savings trajectory model.
#[derive(Debug, Clone, Default)]
pub struct SavingsModel;

impl PredictiveModel for SavingsModel {
    fn kind(&self) -> PredictionKind {
        PredictionKind::SavingsTrajectory
    }

    fn predict(&self, data: &UserData, horizon: TimeHorizon) -> Result<Prediction> {
        let current_savings = data.bounded_number("current_savings", 0.0, 0.0)?;
        let monthly_savings = data.bounded_number("monthly_savings", 0.0, 0.0)?;
        let expected_return = data.bounded_number("expected_return", 7.0, 0.0)?;

        let months = horizon.months() as f64;
        let monthly_rate = expected_return / 100.0 / 12.0;
        let projected = if monthly_rate > 0.0 {
            let growth = (1.0 + monthly_rate).powf(months);
            current_savings * growth + monthly_savings * (growth - 1.0) / monthly_rate
        } else {
            current_savings + monthly_savings * months
        };

        Ok(Prediction {
            prediction_type: self.kind(),
            time_horizon: horizon,
            predicted_value: projected,
            confidence_score: 0.8,
            factors: vec![
                format!("Current savings: {current_savings}"),
                format!("Monthly contribution: {monthly_savings}"),
                format!("Expected return: {expected_return}%"),
            ],
            recommendations: vec![
                "Increase monthly savings by 10%".to_string(),
                "Consider higher return investments".to_string(),
                "Automate savings transfers".to_string(),
                "Review investment allocation".to_string(),
            ],
        })
    }
}

/// Dispatch a prediction request to the matching model.
pub fn predict(kind: PredictionKind, data: &UserData, horizon: TimeHorizon) -> Result<Prediction> {
    match kind {
        PredictionKind::SurvivalProbability => SurvivalModel::default().predict(data, horizon),
        PredictionKind::LayoffRisk => LayoffModel.predict(data, horizon),
        PredictionKind::SavingsTrajectory => SavingsModel.predict(data, horizon),
    }
}
