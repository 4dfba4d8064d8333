//! # fraud-core
//!
//! Implementations behind the fraud/anomaly detection engine: feature
//! scaling, a random-forest classifier, an isolation forest, evaluation
//! metrics and the engine facade that ties them to transactions.

mod analysis;
mod engine;
mod forest;
mod isolation;
mod metrics;
mod scaler;
mod tree;
mod validation;

pub use analysis::{fraud_recommendations, risk_factors};
pub use engine::FraudEngine;
pub use forest::RandomForestClassifier;
pub use isolation::IsolationForest;
pub use metrics::{accuracy, f1_score, precision, recall, roc_auc};
pub use scaler::StandardScaler;
pub use validation::{stratified_split, train_test_split};
