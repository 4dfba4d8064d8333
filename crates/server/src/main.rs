//! # finsight-server
//!
//! REST API server for the finsight financial-insights engine: risk
//! scoring, asset allocation, predictive analytics and ML fraud/anomaly
//! detection.

use std::env;
use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod routes;
mod state;

use state::{AppState, ServerConfig};

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,fraud_core=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env();
    let state = AppState::new(config.clone());

    // Pick up previously trained models when they exist.
    if let Err(e) = state.engine.write().await.load() {
        tracing::warn!("no persisted models loaded: {e}");
    }

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with middleware
    let app = Router::new()
        // Service info and health
        .route("/", get(routes::analytics::root))
        .route("/health", get(routes::analytics::health))
        .route("/favicon.ico", get(routes::analytics::favicon))
        // Core analytics
        .route("/risk-score", post(routes::analytics::risk_score))
        .route(
            "/allocation-optimize",
            post(routes::analytics::allocation_optimize),
        )
        .route(
            "/predictive-analytics",
            post(routes::analytics::predictive_analytics),
        )
        .route(
            "/what-if-simulation",
            post(routes::analytics::what_if_simulation),
        )
        // Fraud & anomaly detection
        .route(
            "/security/fraud-detection",
            post(routes::security::fraud_detection),
        )
        .route(
            "/security/anomaly-detection",
            post(routes::security::anomaly_detection),
        )
        .route("/security/train-models", post(routes::security::train_models))
        .route(
            "/security/generate-datasets",
            get(routes::security::generate_datasets),
        )
        .route("/security/model-status", get(routes::security::model_status))
        .route(
            "/security/security-report",
            get(routes::security::security_report),
        )
        // Scenario insights
        .route(
            "/insights/crisis-simulation",
            post(routes::insights::crisis_simulation),
        )
        .route(
            "/insights/income-volatility",
            post(routes::insights::income_volatility),
        )
        .route(
            "/insights/financial-screening",
            post(routes::insights::financial_screening),
        )
        .route("/insights/model-status", get(routes::insights::model_status))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid HOST:PORT configuration");

    tracing::info!(
        "finsight-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Read an environment variable with a fallback.
pub(crate) fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
