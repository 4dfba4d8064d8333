//! Fraud engine: trains, persists and serves both models.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use fraud_api::EngineConfig;
use fraud_spi::{
    AnomalyFinding, AnomalyTrainingSummary, Classifier, FeatureScaler, FraudError,
    FraudEvaluation, FraudPrediction, ModelStatus, OutlierDetector, Result, RiskAnalysis,
    RiskBand, RiskLevel, Severity, Transaction, TrainingSet, FEATURE_NAMES,
};

use crate::analysis::{fraud_recommendations, risk_factors};
use crate::forest::RandomForestClassifier;
use crate::isolation::IsolationForest;
use crate::metrics::{accuracy, f1_score, precision, recall, roc_auc};
use crate::scaler::StandardScaler;
use crate::validation::{stratified_split, train_test_split};

const FRAUD_MODEL_FILE: &str = "fraud_forest.json";
const ANOMALY_MODEL_FILE: &str = "anomaly_forest.json";
const SCALER_FILE: &str = "scaler.json";

/// Fraud/anomaly detection engine.
///
/// Holds a supervised random forest for fraud scoring and a scaler plus
/// isolation forest for unsupervised anomaly detection. Models are either
/// trained in place or loaded from the configured model directory.
pub struct FraudEngine {
    config: EngineConfig,
    forest: Option<RandomForestClassifier>,
    detector: Option<IsolationForest>,
    scaler: Option<StandardScaler>,
}

impl FraudEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            forest: None,
            detector: None,
            scaler: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Train the fraud classifier and evaluate it on a held-out split.
    pub fn train_fraud_model(&mut self, set: &TrainingSet) -> Result<FraudEvaluation> {
        if set.len() < 10 {
            return Err(FraudError::InsufficientData {
                required: 10,
                got: set.len(),
            });
        }
        let split = &self.config.split;
        let (train, test) = if split.stratify {
            stratified_split(set, split.test_ratio, split.seed)?
        } else {
            train_test_split(set, split.test_ratio, split.seed)?
        };

        info!(
            samples = train.len(),
            held_out = test.len(),
            positive_rate = set.positive_rate(),
            "training fraud classifier"
        );

        let mut forest = RandomForestClassifier::new(self.config.forest.clone());
        forest.fit(&train.features, &train.labels)?;

        let scores = forest.predict_proba_batch(&test.features)?;
        let predicted: Vec<u8> = scores.iter().map(|&p| u8::from(p >= 0.5)).collect();
        let evaluation = FraudEvaluation {
            accuracy: accuracy(&test.labels, &predicted),
            precision: precision(&test.labels, &predicted),
            recall: recall(&test.labels, &predicted),
            f1: f1_score(&test.labels, &predicted),
            roc_auc: roc_auc(&test.labels, &scores),
            support: test.len(),
        };

        info!(
            accuracy = evaluation.accuracy,
            roc_auc = evaluation.roc_auc,
            "fraud classifier trained"
        );
        self.forest = Some(forest);
        Ok(evaluation)
    }

    /// Fit the scaler and isolation forest on unlabelled feature rows.
    pub fn train_anomaly_model(&mut self, samples: &[Vec<f64>]) -> Result<AnomalyTrainingSummary> {
        let mut scaler = StandardScaler::new();
        scaler.fit(samples)?;
        let scaled = scaler.transform_batch(samples)?;

        let mut detector = IsolationForest::new(self.config.isolation.clone());
        detector.fit(&scaled)?;

        let mut flagged = 0usize;
        let mut score_sum = 0.0;
        for row in &scaled {
            if detector.is_outlier(row)? {
                flagged += 1;
            }
            score_sum += detector.score_samples(row)?;
        }
        let summary = AnomalyTrainingSummary {
            samples: samples.len(),
            anomaly_rate: flagged as f64 / samples.len() as f64,
            mean_score: score_sum / samples.len() as f64,
        };

        info!(
            samples = summary.samples,
            anomaly_rate = summary.anomaly_rate,
            "anomaly detector trained"
        );
        self.scaler = Some(scaler);
        self.detector = Some(detector);
        Ok(summary)
    }

    /// Score a single transaction against the fraud classifier.
    pub fn predict_fraud(&self, tx: &Transaction) -> Result<FraudPrediction> {
        let forest = self.forest.as_ref().ok_or(FraudError::NotTrained)?;
        let features = tx.features();
        let probability = forest.predict_proba(&features)?;

        Ok(FraudPrediction {
            is_fraud: probability >= 0.5,
            fraud_probability: probability,
            risk_level: RiskLevel::from_probability(probability),
            features: FEATURE_NAMES
                .iter()
                .map(|s| s.to_string())
                .zip(features)
                .collect(),
        })
    }

    /// Fraud prediction plus risk-factor analysis against the account's
    /// typical transaction amount.
    pub fn analyze_transaction(
        &self,
        tx: &Transaction,
        typical_amount: f64,
    ) -> Result<(FraudPrediction, RiskAnalysis)> {
        let prediction = self.predict_fraud(tx)?;
        let factors = risk_factors(tx, typical_amount);
        let band = RiskBand::from_probability(prediction.fraud_probability);
        let analysis = RiskAnalysis {
            band,
            confidence: prediction
                .fraud_probability
                .max(1.0 - prediction.fraud_probability),
            recommendations: fraud_recommendations(band, &factors),
            factors,
        };
        Ok((prediction, analysis))
    }

    /// Batch anomaly detection over transactions.
    pub fn detect_anomalies(&self, transactions: &[Transaction]) -> Result<Vec<AnomalyFinding>> {
        let scaler = self.scaler.as_ref().ok_or(FraudError::NotTrained)?;
        let detector = self.detector.as_ref().ok_or(FraudError::NotTrained)?;

        transactions
            .iter()
            .map(|tx| {
                let scaled = scaler.transform(&tx.features())?;
                let score = detector.decision_function(&scaled)?;
                Ok(AnomalyFinding {
                    transaction_id: tx.id.clone(),
                    is_anomaly: score < 0.0,
                    anomaly_score: score,
                    severity: Severity::from_score(score),
                })
            })
            .collect()
    }

    /// Persist all fitted models to the model directory.
    pub fn save(&self) -> Result<()> {
        let dir = &self.config.model_dir;
        fs::create_dir_all(dir).map_err(|e| FraudError::Store(e.to_string()))?;

        if let Some(forest) = &self.forest {
            write_json(&dir.join(FRAUD_MODEL_FILE), forest)?;
        }
        if let Some(detector) = &self.detector {
            write_json(&dir.join(ANOMALY_MODEL_FILE), detector)?;
        }
        if let Some(scaler) = &self.scaler {
            write_json(&dir.join(SCALER_FILE), scaler)?;
        }
        info!(dir = %dir.display(), "models saved");
        Ok(())
    }

    /// Load all models from the model directory.
    pub fn load(&mut self) -> Result<()> {
        let dir = &self.config.model_dir;
        self.forest = Some(read_json(&dir.join(FRAUD_MODEL_FILE))?);
        self.detector = Some(read_json(&dir.join(ANOMALY_MODEL_FILE))?);
        self.scaler = Some(read_json(&dir.join(SCALER_FILE))?);
        info!(dir = %dir.display(), "models loaded");
        Ok(())
    }

    /// Load models only when nothing is fitted yet.
    pub fn ensure_loaded(&mut self) -> Result<()> {
        if self.is_ready() {
            return Ok(());
        }
        self.load()
    }

    pub fn is_ready(&self) -> bool {
        self.forest.is_some() && self.detector.is_some() && self.scaler.is_some()
    }

    pub fn status(&self) -> ModelStatus {
        ModelStatus {
            fraud_model_loaded: self.forest.is_some(),
            anomaly_model_loaded: self.detector.is_some(),
            scaler_loaded: self.scaler.is_some(),
        }
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| FraudError::Store(e.to_string()))?;
    serde_json::to_writer(BufWriter::new(file), value)
        .map_err(|e| FraudError::Store(e.to_string()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .map_err(|e| FraudError::Store(format!("{}: {e}", path.display())))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| FraudError::Store(e.to_string()))
}
