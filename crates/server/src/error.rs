//! API error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use allocation::AllocationError;
use fraud::FraudError;
use prediction::PredictionError;
use risk::RiskError;

/// Error surfaced to API clients as a JSON `detail` body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::ServiceUnavailable(detail) => (StatusCode::SERVICE_UNAVAILABLE, detail),
            ApiError::Internal(detail) => {
                tracing::error!("request failed: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<RiskError> for ApiError {
    fn from(e: RiskError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<AllocationError> for ApiError {
    fn from(e: AllocationError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<PredictionError> for ApiError {
    fn from(e: PredictionError) -> Self {
        match e {
            PredictionError::InvalidInput { .. } => ApiError::BadRequest(e.to_string()),
            PredictionError::SimulationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<FraudError> for ApiError {
    fn from(e: FraudError) -> Self {
        match e {
            // Scoring without trained models is a capacity problem, not a
            // caller error.
            FraudError::NotTrained | FraudError::Store(_) => {
                ApiError::ServiceUnavailable(format!("model not available: {e}"))
            }
            _ => ApiError::Internal(e.to_string()),
        }
    }
}
