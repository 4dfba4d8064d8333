//! Fraud Detection Service Provider Interface
//!
//! Defines traits and types for the fraud/anomaly detection engine.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Classifier, FeatureScaler, OutlierDetector};
pub use error::{FraudError, Result};
pub use model::{
    AnomalyFinding, AnomalyTrainingSummary, FraudEvaluation, FraudPrediction, ModelStatus,
    RiskAnalysis, RiskBand, RiskFactors, RiskLevel, Severity, Transaction, TrainingSet,
    FEATURE_NAMES,
};
