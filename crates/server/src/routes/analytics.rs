//! Core analytics handlers: risk score, allocation, predictions, what-if.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use allocation::{AllocationPlanner, AllocationProfile, HeuristicPlanner, PlannerConfig};
use prediction::{
    predict, simulate_what_if, PredictionKind, TimeHorizon, UserData, WhatIfConfig, WhatIfOutcome,
    WhatIfRequest,
};
use risk::{FinancialSnapshot, RiskLevel, RiskScorer, WeightedRiskScorer};

use crate::error::ApiError;
use crate::routes::{round, timestamp};
use crate::state::AppState;

/// Root endpoint - API information.
pub async fn root() -> Json<Value> {
    Json(json!({
        "service": "finsight",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational",
        "endpoints": {
            "health": "/health",
            "risk_score": "/risk-score",
            "allocation_optimize": "/allocation-optimize",
            "predictive_analytics": "/predictive-analytics",
            "what_if_simulation": "/what-if-simulation",
            "fraud_detection": "/security/fraud-detection",
            "anomaly_detection": "/security/anomaly-detection"
        }
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub models_loaded: u32,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    let status = state.engine.read().await.status();
    let models_loaded = u32::from(status.fraud_model_loaded)
        + u32::from(status.anomaly_model_loaded)
        + u32::from(status.scaler_loaded);
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: timestamp(),
        models_loaded,
    })
}

/// Serve an empty favicon to avoid 404 noise.
pub async fn favicon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/x-icon")], Vec::<u8>::new())
}

// ============================================================================
// Risk scoring
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RiskScoreRequest {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub debt: f64,
}

#[derive(Debug, Serialize)]
pub struct RiskScoreResponse {
    pub risk_score: f64,
    pub level: RiskLevel,
    pub factors: RiskFactorsResponse,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct RiskFactorsResponse {
    pub expense_ratio: f64,
    pub savings_ratio: f64,
    pub debt_ratio: f64,
}

pub async fn risk_score(
    Json(request): Json<RiskScoreRequest>,
) -> Result<Json<RiskScoreResponse>, ApiError> {
    info!("calculating risk score for income: {}", request.income);

    let snapshot = FinancialSnapshot {
        income: request.income,
        expenses: request.expenses,
        savings: request.savings,
        debt: request.debt,
    };
    let assessment = WeightedRiskScorer::default().score(&snapshot)?;

    Ok(Json(RiskScoreResponse {
        risk_score: round(assessment.risk_score, 2),
        level: assessment.level,
        factors: RiskFactorsResponse {
            expense_ratio: round(assessment.factors.expense_ratio, 2),
            savings_ratio: round(assessment.factors.savings_ratio, 2),
            debt_ratio: round(assessment.factors.debt_ratio, 2),
        },
        timestamp: timestamp(),
    }))
}

// ============================================================================
// Asset allocation
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AllocationResponse {
    pub sip_percentage: f64,
    pub stocks_percentage: f64,
    pub bonds_percentage: f64,
    pub lifestyle_percentage: f64,
    pub emergency_fund_percentage: f64,
    pub reasoning: Vec<String>,
    pub confidence: f64,
    pub market_context: String,
    pub risk_adjustment: String,
}

pub async fn allocation_optimize(
    Json(profile): Json<AllocationProfile>,
) -> Result<Json<AllocationResponse>, ApiError> {
    info!("optimizing allocation for user age: {}", profile.age);

    let plan = HeuristicPlanner::new(PlannerConfig::default()).optimize(&profile)?;
    Ok(Json(AllocationResponse {
        sip_percentage: round(plan.allocation.sip_percentage, 2),
        stocks_percentage: round(plan.allocation.stocks_percentage, 2),
        bonds_percentage: round(plan.allocation.bonds_percentage, 2),
        lifestyle_percentage: round(plan.allocation.lifestyle_percentage, 2),
        emergency_fund_percentage: round(plan.allocation.emergency_fund_percentage, 2),
        reasoning: plan.reasoning,
        confidence: plan.confidence,
        market_context: plan.market_context,
        risk_adjustment: plan.risk_adjustment,
    }))
}

// ============================================================================
// Predictive analytics
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PredictiveAnalyticsRequest {
    pub user_data: UserData,
    pub prediction_type: PredictionKind,
    pub time_horizon: TimeHorizon,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction_type: PredictionKind,
    pub time_horizon: TimeHorizon,
    pub predicted_value: f64,
    pub confidence_score: f64,
    pub factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub timestamp: String,
}

pub async fn predictive_analytics(
    Json(request): Json<PredictiveAnalyticsRequest>,
) -> Result<Json<PredictionResponse>, ApiError> {
    info!(
        "generating {:?} prediction for horizon {:?}",
        request.prediction_type, request.time_horizon
    );

    let prediction = predict(request.prediction_type, &request.user_data, request.time_horizon)?;

    // Probabilities carry three decimals, currency amounts two.
    let digits = match prediction.prediction_type {
        PredictionKind::SavingsTrajectory => 2,
        _ => 3,
    };
    Ok(Json(PredictionResponse {
        prediction_type: prediction.prediction_type,
        time_horizon: prediction.time_horizon,
        predicted_value: round(prediction.predicted_value, digits),
        confidence_score: prediction.confidence_score,
        factors: prediction.factors,
        recommendations: prediction.recommendations,
        timestamp: timestamp(),
    }))
}

// ============================================================================
// What-if simulation
// ============================================================================

#[derive(Debug, Serialize)]
pub struct WhatIfSimulationResponse {
    #[serde(flatten)]
    pub outcome: WhatIfOutcome,
    pub timestamp: String,
}

pub async fn what_if_simulation(
    Json(request): Json<WhatIfRequest>,
) -> Result<Json<WhatIfSimulationResponse>, ApiError> {
    info!(
        "running what-if simulation: {} runs over {} years",
        request.num_simulations, request.simulation_years
    );

    let mut outcome = simulate_what_if(&request, &WhatIfConfig::default())?;
    outcome.survival_probability = round(outcome.survival_probability, 3);
    outcome.average_net_worth = round(outcome.average_net_worth, 2);
    outcome.median_net_worth = round(outcome.median_net_worth, 2);
    outcome.worst_case_net_worth = round(outcome.worst_case_net_worth, 2);
    outcome.best_case_net_worth = round(outcome.best_case_net_worth, 2);

    Ok(Json(WhatIfSimulationResponse {
        outcome,
        timestamp: timestamp(),
    }))
}
