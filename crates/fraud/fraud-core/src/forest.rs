//! Random-forest classifier.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use fraud_api::ForestConfig;
use fraud_spi::{Classifier, FraudError, Result};

use crate::tree::{DecisionTree, TreeParams};

/// Ensemble of CART trees over bootstrap samples.
///
/// `predict_proba` averages per-tree leaf probabilities, so scores move in
/// small increments rather than hard votes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForestClassifier {
    config: ForestConfig,
    trees: Vec<DecisionTree>,
    n_features: usize,
    fitted: bool,
}

impl RandomForestClassifier {
    pub fn new(config: ForestConfig) -> Self {
        Self {
            config,
            trees: Vec::new(),
            n_features: 0,
            fitted: false,
        }
    }

    pub fn config(&self) -> &ForestConfig {
        &self.config
    }

    /// Probability of fraud for each sample in a batch.
    pub fn predict_proba_batch(&self, samples: &[Vec<f64>]) -> Result<Vec<f64>> {
        samples.iter().map(|s| self.predict_proba(s)).collect()
    }

    fn validate(&self, samples: &[Vec<f64>], labels: &[u8]) -> Result<usize> {
        if self.config.n_estimators == 0 {
            return Err(FraudError::InvalidParameter {
                name: "n_estimators".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if samples.len() != labels.len() {
            return Err(FraudError::TrainingError(format!(
                "{} samples but {} labels",
                samples.len(),
                labels.len()
            )));
        }
        if samples.len() < 2 {
            return Err(FraudError::InsufficientData {
                required: 2,
                got: samples.len(),
            });
        }
        let width = samples[0].len();
        if width == 0 || samples.iter().any(|s| s.len() != width) {
            return Err(FraudError::TrainingError(
                "ragged or empty feature matrix".to_string(),
            ));
        }
        Ok(width)
    }
}

impl Classifier for RandomForestClassifier {
    fn fit(&mut self, samples: &[Vec<f64>], labels: &[u8]) -> Result<()> {
        let width = self.validate(samples, labels)?;
        let n = samples.len();

        // Balanced mode: weight classes inversely to their frequency,
        // n / (2 * n_class), matching the usual class_weight convention.
        let positives = labels.iter().filter(|&&y| y == 1).count();
        let negatives = n - positives;
        let (w_pos, w_neg) = if self.config.balanced && positives > 0 && negatives > 0 {
            (
                n as f64 / (2.0 * positives as f64),
                n as f64 / (2.0 * negatives as f64),
            )
        } else {
            (1.0, 1.0)
        };
        let weights: Vec<f64> = labels
            .iter()
            .map(|&y| if y == 1 { w_pos } else { w_neg })
            .collect();

        let params = TreeParams {
            max_depth: self.config.max_depth,
            min_samples_split: self.config.min_samples_split,
            min_samples_leaf: self.config.min_samples_leaf,
            max_features: (width as f64).sqrt().round().max(1.0) as usize,
        };
        let seed = self.config.seed;

        let trees: Vec<DecisionTree> = (0..self.config.n_estimators)
            .into_par_iter()
            .map(|t| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(t as u64));
                let bootstrap: Vec<usize> =
                    (0..n).map(|_| rng.gen_range(0..n)).collect();
                DecisionTree::fit(samples, labels, &weights, bootstrap, params, &mut rng)
            })
            .collect();

        self.trees = trees;
        self.n_features = width;
        self.fitted = true;
        Ok(())
    }

    fn predict_proba(&self, sample: &[f64]) -> Result<f64> {
        if !self.fitted {
            return Err(FraudError::NotTrained);
        }
        if sample.len() != self.n_features {
            return Err(FraudError::DimensionMismatch {
                expected: self.n_features,
                got: sample.len(),
            });
        }
        let sum: f64 = self.trees.iter().map(|t| t.predict_proba(sample)).sum();
        Ok(sum / self.trees.len() as f64)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl Default for RandomForestClassifier {
    fn default() -> Self {
        Self::new(ForestConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraud_api::ForestConfig;

    fn small_config() -> ForestConfig {
        ForestConfig {
            n_estimators: 25,
            max_depth: 6,
            min_samples_split: 2,
            min_samples_leaf: 1,
            balanced: true,
            seed: 42,
        }
    }

    /// Two well-separated clusters on two features.
    fn clustered_data() -> (Vec<Vec<f64>>, Vec<u8>) {
        let mut samples = Vec::new();
        let mut labels = Vec::new();
        for i in 0..40 {
            let jitter = (i % 7) as f64 * 0.05;
            samples.push(vec![1.0 + jitter, 2.0 - jitter]);
            labels.push(0);
        }
        for i in 0..40 {
            let jitter = (i % 5) as f64 * 0.05;
            samples.push(vec![8.0 + jitter, 9.0 - jitter]);
            labels.push(1);
        }
        (samples, labels)
    }

    #[test]
    fn test_separates_clusters() {
        let (samples, labels) = clustered_data();
        let mut forest = RandomForestClassifier::new(small_config());
        forest.fit(&samples, &labels).unwrap();

        assert!(forest.predict_proba(&[8.2, 8.8]).unwrap() > 0.8);
        assert!(forest.predict_proba(&[1.1, 1.9]).unwrap() < 0.2);
        assert!(forest.predict(&[8.2, 8.8]).unwrap());
        assert!(!forest.predict(&[1.1, 1.9]).unwrap());
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let (samples, labels) = clustered_data();
        let mut a = RandomForestClassifier::new(small_config());
        let mut b = RandomForestClassifier::new(small_config());
        a.fit(&samples, &labels).unwrap();
        b.fit(&samples, &labels).unwrap();

        let probe = vec![4.0, 5.0];
        assert_eq!(
            a.predict_proba(&probe).unwrap(),
            b.predict_proba(&probe).unwrap()
        );
    }

    #[test]
    fn test_probability_in_unit_interval() {
        let (samples, labels) = clustered_data();
        let mut forest = RandomForestClassifier::new(small_config());
        forest.fit(&samples, &labels).unwrap();

        for sample in &samples {
            let p = forest.predict_proba(sample).unwrap();
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_unfitted_predict_fails() {
        let forest = RandomForestClassifier::new(small_config());
        assert!(matches!(
            forest.predict_proba(&[0.0, 0.0]),
            Err(FraudError::NotTrained)
        ));
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let (samples, labels) = clustered_data();
        let mut forest = RandomForestClassifier::new(small_config());
        forest.fit(&samples, &labels).unwrap();
        assert!(matches!(
            forest.predict_proba(&[1.0]),
            Err(FraudError::DimensionMismatch { expected: 2, got: 1 })
        ));
    }

    #[test]
    fn test_serde_roundtrip_preserves_predictions() {
        let (samples, labels) = clustered_data();
        let mut forest = RandomForestClassifier::new(small_config());
        forest.fit(&samples, &labels).unwrap();

        let json = serde_json::to_string(&forest).unwrap();
        let restored: RandomForestClassifier = serde_json::from_str(&json).unwrap();

        let probe = vec![7.9, 9.1];
        assert_eq!(
            forest.predict_proba(&probe).unwrap(),
            restored.predict_proba(&probe).unwrap()
        );
    }
}
