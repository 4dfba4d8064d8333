//! Training data and evaluation types.

use serde::{Deserialize, Serialize};

use crate::error::{FraudError, Result};

/// Labelled feature matrix used to train the fraud classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingSet {
    pub features: Vec<Vec<f64>>,
    /// 1 for fraud, 0 for legitimate.
    pub labels: Vec<u8>,
}

impl TrainingSet {
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<u8>) -> Result<Self> {
        if features.len() != labels.len() {
            return Err(FraudError::TrainingError(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        Ok(Self { features, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Fraction of positive labels.
    pub fn positive_rate(&self) -> f64 {
        if self.labels.is_empty() {
            return 0.0;
        }
        let positives = self.labels.iter().filter(|&&y| y == 1).count();
        positives as f64 / self.labels.len() as f64
    }
}

/// Held-out evaluation of the fraud classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudEvaluation {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub roc_auc: f64,
    /// Number of held-out samples evaluated.
    pub support: usize,
}

/// Summary of an unsupervised anomaly-model fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyTrainingSummary {
    pub samples: usize,
    /// Fraction of training samples flagged as outliers.
    pub anomaly_rate: f64,
    /// Mean raw anomaly score over the training set.
    pub mean_score: f64,
}

/// Which engine components hold a fitted model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModelStatus {
    pub fraud_model_loaded: bool,
    pub anomaly_model_loaded: bool,
    pub scaler_loaded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_set_rejects_length_mismatch() {
        let result = TrainingSet::new(vec![vec![1.0], vec![2.0]], vec![0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_positive_rate() {
        let set =
            TrainingSet::new(vec![vec![0.0]; 4], vec![1, 0, 0, 1]).unwrap();
        assert!((set.positive_rate() - 0.5).abs() < 1e-12);
    }
}
