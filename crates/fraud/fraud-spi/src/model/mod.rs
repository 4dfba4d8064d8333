pub mod anomaly;
pub mod evaluation;
pub mod prediction;
pub mod transaction;

pub use anomaly::{AnomalyFinding, Severity};
pub use evaluation::{AnomalyTrainingSummary, FraudEvaluation, ModelStatus, TrainingSet};
pub use prediction::{FraudPrediction, RiskAnalysis, RiskBand, RiskFactors, RiskLevel};
pub use transaction::{Transaction, FEATURE_NAMES};
