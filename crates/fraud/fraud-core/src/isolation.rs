//! Isolation forest for unsupervised anomaly detection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use fraud_api::IsolationConfig;
use fraud_spi::{FraudError, OutlierDetector, Result};

const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Average path length of an unsuccessful search in a BST of `n` nodes.
///
/// Normalises isolation depths so scores are comparable across subsample
/// sizes.
fn average_path_length(n: usize) -> f64 {
    match n {
        0 | 1 => 0.0,
        2 => 1.0,
        _ => {
            let n = n as f64;
            2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
enum Node {
    Leaf {
        size: usize,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IsolationTree {
    nodes: Vec<Node>,
}

impl IsolationTree {
    fn fit(
        samples: &[Vec<f64>],
        indices: Vec<usize>,
        height_limit: usize,
        rng: &mut StdRng,
    ) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.build(samples, indices, 0, height_limit, rng);
        tree
    }

    fn build(
        &mut self,
        samples: &[Vec<f64>],
        indices: Vec<usize>,
        depth: usize,
        height_limit: usize,
        rng: &mut StdRng,
    ) -> usize {
        if depth >= height_limit || indices.len() <= 1 {
            return self.push(Node::Leaf {
                size: indices.len(),
            });
        }

        // Only features that still vary over this partition can split it.
        let n_features = samples[indices[0]].len();
        let splittable: Vec<(usize, f64, f64)> = (0..n_features)
            .filter_map(|f| {
                let mut lo = f64::INFINITY;
                let mut hi = f64::NEG_INFINITY;
                for &i in &indices {
                    lo = lo.min(samples[i][f]);
                    hi = hi.max(samples[i][f]);
                }
                (hi > lo).then_some((f, lo, hi))
            })
            .collect();

        if splittable.is_empty() {
            return self.push(Node::Leaf {
                size: indices.len(),
            });
        }

        let (feature, lo, hi) = splittable[rng.gen_range(0..splittable.len())];
        let threshold = rng.gen_range(lo..hi);
        let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&i| samples[i][feature] <= threshold);

        let at = self.push(Node::Leaf { size: 0 });
        let left = self.build(samples, left_idx, depth + 1, height_limit, rng);
        let right = self.build(samples, right_idx, depth + 1, height_limit, rng);
        self.nodes[at] = Node::Split {
            feature,
            threshold,
            left,
            right,
        };
        at
    }

    fn path_length(&self, sample: &[f64]) -> f64 {
        let mut at = 0;
        let mut depth = 0.0;
        loop {
            match &self.nodes[at] {
                Node::Leaf { size } => return depth + average_path_length(*size),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    at = if sample[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                    depth += 1.0;
                }
            }
        }
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

/// Ensemble of isolation trees.
///
/// `score_samples` follows the standard convention: values in [-1, 0] with
/// lower meaning more isolated. The decision offset sits at -0.5 unless a
/// contamination fraction shifts it to the matching training quantile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsolationForest {
    config: IsolationConfig,
    trees: Vec<IsolationTree>,
    /// Effective subsample size used at fit time.
    psi: usize,
    offset: f64,
    n_features: usize,
    fitted: bool,
}

impl IsolationForest {
    pub fn new(config: IsolationConfig) -> Self {
        Self {
            config,
            trees: Vec::new(),
            psi: 0,
            offset: -0.5,
            n_features: 0,
            fitted: false,
        }
    }

    pub fn config(&self) -> &IsolationConfig {
        &self.config
    }

    /// Decision threshold in raw-score space.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    fn raw_score(&self, sample: &[f64]) -> f64 {
        let mean_path: f64 = self
            .trees
            .iter()
            .map(|t| t.path_length(sample))
            .sum::<f64>()
            / self.trees.len() as f64;
        let denom = average_path_length(self.psi);
        if denom <= 0.0 {
            return -1.0;
        }
        -(2f64.powf(-mean_path / denom))
    }
}

impl OutlierDetector for IsolationForest {
    fn fit(&mut self, samples: &[Vec<f64>]) -> Result<()> {
        if self.config.n_estimators == 0 {
            return Err(FraudError::InvalidParameter {
                name: "n_estimators".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if !(0.0..=0.5).contains(&self.config.contamination) {
            return Err(FraudError::InvalidParameter {
                name: "contamination".to_string(),
                reason: "must be in [0, 0.5]".to_string(),
            });
        }
        let n = samples.len();
        if n < 2 {
            return Err(FraudError::InsufficientData {
                required: 2,
                got: n,
            });
        }
        let width = samples[0].len();
        if width == 0 || samples.iter().any(|s| s.len() != width) {
            return Err(FraudError::TrainingError(
                "ragged or empty feature matrix".to_string(),
            ));
        }

        let psi = self.config.max_samples.clamp(2, n);
        let height_limit = (psi as f64).log2().ceil() as usize;
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        let trees: Vec<IsolationTree> = (0..self.config.n_estimators)
            .map(|_| {
                let indices = subsample(n, psi, &mut rng);
                IsolationTree::fit(samples, indices, height_limit, &mut rng)
            })
            .collect();

        self.trees = trees;
        self.psi = psi;
        self.n_features = width;
        self.fitted = true;

        // Contamination pins the decision threshold at the matching quantile
        // of training scores; otherwise the midpoint -0.5 is used.
        self.offset = if self.config.contamination > 0.0 {
            let mut scores: Vec<f64> =
                samples.iter().map(|s| self.raw_score(s)).collect();
            scores.sort_by(f64::total_cmp);
            quantile(&scores, self.config.contamination)
        } else {
            -0.5
        };
        Ok(())
    }

    fn score_samples(&self, sample: &[f64]) -> Result<f64> {
        if !self.fitted {
            return Err(FraudError::NotTrained);
        }
        if sample.len() != self.n_features {
            return Err(FraudError::DimensionMismatch {
                expected: self.n_features,
                got: sample.len(),
            });
        }
        Ok(self.raw_score(sample))
    }

    fn decision_function(&self, sample: &[f64]) -> Result<f64> {
        Ok(self.score_samples(sample)? - self.offset)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl Default for IsolationForest {
    fn default() -> Self {
        Self::new(IsolationConfig::default())
    }
}

/// Draw `k` distinct indices out of `0..n`.
fn subsample(n: usize, k: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = rng.gen_range(i..n);
        pool.swap(i, j);
    }
    pool.truncate(k);
    pool
}

/// Linear-interpolation quantile of pre-sorted values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return -0.5;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IsolationConfig {
        IsolationConfig {
            n_estimators: 50,
            max_samples: 64,
            contamination: 0.1,
            seed: 42,
        }
    }

    /// Tight cluster with a handful of far-away points.
    fn data_with_outliers() -> Vec<Vec<f64>> {
        let mut samples = Vec::new();
        for i in 0..90 {
            let dx = (i % 9) as f64 * 0.02;
            let dy = (i % 7) as f64 * 0.03;
            samples.push(vec![1.0 + dx, 1.0 + dy]);
        }
        for i in 0..10 {
            samples.push(vec![50.0 + i as f64, -40.0 - i as f64]);
        }
        samples
    }

    #[test]
    fn test_scores_bounded() {
        let samples = data_with_outliers();
        let mut forest = IsolationForest::new(config());
        forest.fit(&samples).unwrap();

        for sample in &samples {
            let score = forest.score_samples(sample).unwrap();
            assert!((-1.0..=0.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn test_outliers_score_lower_than_inliers() {
        let samples = data_with_outliers();
        let mut forest = IsolationForest::new(config());
        forest.fit(&samples).unwrap();

        let inlier = forest.score_samples(&[1.05, 1.05]).unwrap();
        let outlier = forest.score_samples(&[55.0, -45.0]).unwrap();
        assert!(outlier < inlier);
    }

    #[test]
    fn test_decision_function_flags_outliers() {
        let samples = data_with_outliers();
        let mut forest = IsolationForest::new(config());
        forest.fit(&samples).unwrap();

        assert!(forest.is_outlier(&[55.0, -45.0]).unwrap());
        assert!(!forest.is_outlier(&[1.05, 1.05]).unwrap());
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let samples = data_with_outliers();
        let mut a = IsolationForest::new(config());
        let mut b = IsolationForest::new(config());
        a.fit(&samples).unwrap();
        b.fit(&samples).unwrap();

        let probe = vec![3.0, 2.0];
        assert_eq!(
            a.score_samples(&probe).unwrap(),
            b.score_samples(&probe).unwrap()
        );
        assert_eq!(a.offset(), b.offset());
    }

    #[test]
    fn test_unfitted_score_fails() {
        let forest = IsolationForest::new(config());
        assert!(matches!(
            forest.score_samples(&[0.0, 0.0]),
            Err(FraudError::NotTrained)
        ));
    }

    #[test]
    fn test_serde_roundtrip_preserves_scores() {
        let samples = data_with_outliers();
        let mut forest = IsolationForest::new(config());
        forest.fit(&samples).unwrap();

        let json = serde_json::to_string(&forest).unwrap();
        let restored: IsolationForest = serde_json::from_str(&json).unwrap();

        let probe = vec![10.0, -5.0];
        assert_eq!(
            forest.decision_function(&probe).unwrap(),
            restored.decision_function(&probe).unwrap()
        );
    }

    #[test]
    fn test_average_path_length_known_values() {
        assert_eq!(average_path_length(0), 0.0);
        assert_eq!(average_path_length(1), 0.0);
        assert_eq!(average_path_length(2), 1.0);
        // c(256) is roughly 10.24 for the canonical subsample size.
        let c = average_path_length(256);
        assert!((c - 10.24).abs() < 0.1);
    }
}
