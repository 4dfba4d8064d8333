//! Fraud and anomaly detection handlers.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};

use datagen::{feature_matrix, save_all_datasets, DatasetSummary, TransactionGenerator, DEFAULT_SEED};
use fraud::{AnomalyFinding, FraudEngine, FraudPrediction, RiskAnalysis, Transaction, TrainingSet};

use crate::error::ApiError;
use crate::routes::{round, timestamp};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FraudDetectionRequest {
    #[serde(flatten)]
    pub transaction: Transaction,
    /// When present, the response carries risk-factor analysis against this
    /// account norm.
    pub typical_transaction_amount: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct FraudDetectionResponse {
    #[serde(flatten)]
    pub prediction: FraudPrediction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<RiskAnalysis>,
}

/// Score one transaction against the fraud classifier.
pub async fn fraud_detection(
    State(state): State<AppState>,
    Json(request): Json<FraudDetectionRequest>,
) -> Result<Json<FraudDetectionResponse>, ApiError> {
    state.ensure_models().await?;
    let engine = state.engine.read().await;

    let (mut prediction, analysis) = match request.typical_transaction_amount {
        Some(typical) => {
            let (prediction, analysis) =
                engine.analyze_transaction(&request.transaction, typical)?;
            (prediction, Some(analysis))
        }
        None => (engine.predict_fraud(&request.transaction)?, None),
    };
    prediction.fraud_probability = round(prediction.fraud_probability, 4);
    let analysis = analysis.map(|mut a| {
        a.confidence = round(a.confidence, 4);
        a
    });

    Ok(Json(FraudDetectionResponse {
        prediction,
        analysis,
    }))
}

/// Batch anomaly detection over transactions.
pub async fn anomaly_detection(
    State(state): State<AppState>,
    Json(transactions): Json<Vec<Transaction>>,
) -> Result<Json<Vec<AnomalyFinding>>, ApiError> {
    state.ensure_models().await?;
    let engine = state.engine.read().await;

    let mut findings = engine.detect_anomalies(&transactions)?;
    for finding in &mut findings {
        finding.anomaly_score = round(finding.anomaly_score, 4);
    }
    Ok(Json(findings))
}

/// Kick off background model training on freshly generated data.
pub async fn train_models(State(state): State<AppState>) -> Json<Value> {
    let engine_slot = state.engine.clone();
    let rows = state.config.training_rows;

    tokio::spawn(async move {
        let config = engine_slot.read().await.config().clone();
        let trained = tokio::task::spawn_blocking(move || {
            info!("generating {rows} synthetic transactions for training");
            let records = TransactionGenerator::new(DEFAULT_SEED).generate(rows);
            let (features, labels) = feature_matrix(&records);
            let set = TrainingSet::new(features, labels)?;

            let mut engine = FraudEngine::new(config);
            let evaluation = engine.train_fraud_model(&set)?;
            info!(
                accuracy = evaluation.accuracy,
                roc_auc = evaluation.roc_auc,
                "fraud model trained"
            );
            let summary = engine.train_anomaly_model(&set.features)?;
            info!(anomaly_rate = summary.anomaly_rate, "anomaly model trained");
            engine.save()?;
            Ok::<FraudEngine, fraud::FraudError>(engine)
        })
        .await;

        match trained {
            Ok(Ok(engine)) => {
                *engine_slot.write().await = engine;
                info!("background training complete, models swapped in");
            }
            Ok(Err(e)) => error!("background training failed: {e}"),
            Err(e) => error!("background training panicked: {e}"),
        }
    });

    Json(json!({
        "message": "Training started in background",
        "status": "processing"
    }))
}

/// Kick off background dataset generation.
pub async fn generate_datasets(State(state): State<AppState>) -> Json<Value> {
    let data_dir = state.config.data_dir.clone();
    let counts = DatasetSummary::default();

    tokio::spawn(async move {
        let result =
            tokio::task::spawn_blocking(move || save_all_datasets(&data_dir, DEFAULT_SEED, counts))
                .await;
        match result {
            Ok(Ok(written)) => info!("generated {} synthetic samples", written.total()),
            Ok(Err(e)) => error!("dataset generation failed: {e}"),
            Err(e) => error!("dataset generation panicked: {e}"),
        }
    });

    Json(json!({
        "message": "Dataset generation started",
        "estimated_samples": counts.total(),
        "datasets": [
            {"name": "transactions", "samples": counts.transactions},
            {"name": "network_traffic", "samples": counts.network_traffic},
            {"name": "user_behavior", "samples": counts.user_behavior},
            {"name": "compliance_audit", "samples": counts.compliance_audit},
            {"name": "financial_crisis", "samples": counts.financial_crisis},
        ]
    }))
}

/// Status of the trained models.
pub async fn model_status(State(state): State<AppState>) -> Json<Value> {
    let status = state.engine.read().await.status();
    Json(json!({
        "fraud_model_loaded": status.fraud_model_loaded,
        "intrusion_model_loaded": status.anomaly_model_loaded,
        "scaler_loaded": status.scaler_loaded,
        "timestamp": timestamp(),
    }))
}

/// Summary report of the detection subsystem.
pub async fn security_report(State(state): State<AppState>) -> Json<Value> {
    let counts = DatasetSummary::default();
    let status = state.engine.read().await.status();
    Json(json!({
        "timestamp": timestamp(),
        "fraud_detection": {
            "model_loaded": status.fraud_model_loaded,
            "model_type": "RandomForestClassifier",
            "training_samples": counts.transactions,
            "fraud_rate": "5%",
        },
        "anomaly_detection": {
            "model_loaded": status.anomaly_model_loaded,
            "model_contamination": "5%",
            "detection_method": "IsolationForest",
        },
        "compliance": {
            "audit_logs_generated": counts.compliance_audit,
            "gdpr_compliant": true,
            "hipaa_compliant": true,
        },
    }))
}
