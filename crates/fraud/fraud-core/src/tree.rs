//! CART decision tree used by the random-forest classifier.

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Split-search parameters shared by every tree in a forest.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TreeParams {
    pub max_depth: usize,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    /// Number of candidate features examined per split.
    pub max_features: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
enum Node {
    Leaf {
        /// Weighted positive-class probability at this leaf.
        proba: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// Binary classification tree with axis-aligned splits on Gini impurity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DecisionTree {
    nodes: Vec<Node>,
}

struct BuildContext<'a> {
    samples: &'a [Vec<f64>],
    labels: &'a [u8],
    weights: &'a [f64],
    params: TreeParams,
    n_features: usize,
}

impl DecisionTree {
    /// Grow a tree over the given sample indices.
    pub fn fit(
        samples: &[Vec<f64>],
        labels: &[u8],
        weights: &[f64],
        indices: Vec<usize>,
        params: TreeParams,
        rng: &mut StdRng,
    ) -> Self {
        let n_features = samples.first().map_or(0, Vec::len);
        let mut tree = Self { nodes: Vec::new() };
        let ctx = BuildContext {
            samples,
            labels,
            weights,
            params,
            n_features,
        };
        tree.build(&ctx, indices, 0, rng);
        tree
    }

    /// Positive-class probability for one sample.
    pub fn predict_proba(&self, sample: &[f64]) -> f64 {
        let mut at = 0;
        loop {
            match &self.nodes[at] {
                Node::Leaf { proba } => return *proba,
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
                }
            }
        }
    }

    fn build(
        &mut self,
        ctx: &BuildContext<'_>,
        indices: Vec<usize>,
        depth: usize,
        rng: &mut StdRng,
    ) -> usize {
        let (w_pos, w_total) = weighted_positives(ctx, &indices);
        let proba = if w_total > 0.0 { w_pos / w_total } else { 0.0 };
        let pure = proba <= f64::EPSILON || proba >= 1.0 - f64::EPSILON;

        if depth >= ctx.params.max_depth
            || indices.len() < ctx.params.min_samples_split
            || pure
        {
            return self.push(Node::Leaf { proba });
        }

        let parent_impurity = gini(w_pos, w_total);
        match self.best_split(ctx, &indices, parent_impurity, rng) {
            Some((feature, threshold)) => {
                let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
                    .into_iter()
                    .partition(|&i| ctx.samples[i][feature] <= threshold);

                // Reserve the split slot before recursing so child ids are stable.
                let at = self.push(Node::Leaf { proba });
                let left = self.build(ctx, left_idx, depth + 1, rng);
                let right = self.build(ctx, right_idx, depth + 1, rng);
                self.nodes[at] = Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                };
                at
            }
            None => self.push(Node::Leaf { proba }),
        }
    }

    fn best_split(
        &self,
        ctx: &BuildContext<'_>,
        indices: &[usize],
        parent_impurity: f64,
        rng: &mut StdRng,
    ) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64, f64)> = None;
        let candidates = feature_subset(ctx.n_features, ctx.params.max_features, rng);

        for feature in candidates {
            let mut column: Vec<(f64, u8, f64)> = indices
                .iter()
                .map(|&i| (ctx.samples[i][feature], ctx.labels[i], ctx.weights[i]))
                .collect();
            column.sort_by(|a, b| a.0.total_cmp(&b.0));

            let w_total: f64 = column.iter().map(|c| c.2).sum();
            let w_pos_total: f64 = column.iter().filter(|c| c.1 == 1).map(|c| c.2).sum();

            let mut w_left = 0.0;
            let mut w_pos_left = 0.0;
            for i in 1..column.len() {
                w_left += column[i - 1].2;
                if column[i - 1].1 == 1 {
                    w_pos_left += column[i - 1].2;
                }
                if column[i].0 <= column[i - 1].0 {
                    continue;
                }
                if i < ctx.params.min_samples_leaf
                    || column.len() - i < ctx.params.min_samples_leaf
                {
                    continue;
                }

                let w_right = w_total - w_left;
                let impurity = (w_left * gini(w_pos_left, w_left)
                    + w_right * gini(w_pos_total - w_pos_left, w_right))
                    / w_total;
                if impurity + 1e-12 < parent_impurity
                    && best.map_or(true, |(_, _, s)| impurity < s)
                {
                    let threshold = (column[i - 1].0 + column[i].0) / 2.0;
                    best = Some((feature, threshold, impurity));
                }
            }
        }

        best.map(|(feature, threshold, _)| (feature, threshold))
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

/// Draw `k` distinct feature indices.
fn feature_subset(n_features: usize, k: usize, rng: &mut StdRng) -> Vec<usize> {
    let k = k.clamp(1, n_features.max(1));
    if k >= n_features {
        return (0..n_features).collect();
    }
    let mut pool: Vec<usize> = (0..n_features).collect();
    for i in 0..k {
        let j = rng.gen_range(i..n_features);
        pool.swap(i, j);
    }
    pool.truncate(k);
    pool
}

fn weighted_positives(ctx: &BuildContext<'_>, indices: &[usize]) -> (f64, f64) {
    let mut w_pos = 0.0;
    let mut w_total = 0.0;
    for &i in indices {
        w_total += ctx.weights[i];
        if ctx.labels[i] == 1 {
            w_pos += ctx.weights[i];
        }
    }
    (w_pos, w_total)
}

/// Gini impurity of a binary node given positive weight and total weight.
fn gini(w_pos: f64, w_total: f64) -> f64 {
    if w_total <= 0.0 {
        return 0.0;
    }
    let p = w_pos / w_total;
    2.0 * p * (1.0 - p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn params() -> TreeParams {
        TreeParams {
            max_depth: 5,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: 2,
        }
    }

    #[test]
    fn test_learns_threshold_split() {
        // Positive class strictly above x = 5 on feature 0.
        let samples: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64, 0.0]).collect();
        let labels: Vec<u8> = (0..10).map(|i| u8::from(i > 5)).collect();
        let weights = vec![1.0; 10];
        let mut rng = StdRng::seed_from_u64(7);

        let tree = DecisionTree::fit(
            &samples,
            &labels,
            &weights,
            (0..10).collect(),
            params(),
            &mut rng,
        );

        assert!(tree.predict_proba(&[9.0, 0.0]) > 0.9);
        assert!(tree.predict_proba(&[1.0, 0.0]) < 0.1);
    }

    #[test]
    fn test_pure_node_is_single_leaf() {
        let samples = vec![vec![1.0], vec![2.0], vec![3.0]];
        let labels = vec![0, 0, 0];
        let weights = vec![1.0; 3];
        let mut rng = StdRng::seed_from_u64(1);

        let tree = DecisionTree::fit(
            &samples,
            &labels,
            &weights,
            vec![0, 1, 2],
            params(),
            &mut rng,
        );
        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(tree.predict_proba(&[2.0]), 0.0);
    }

    #[test]
    fn test_gini_bounds() {
        assert_eq!(gini(0.0, 10.0), 0.0);
        assert_eq!(gini(10.0, 10.0), 0.0);
        assert!((gini(5.0, 10.0) - 0.5).abs() < 1e-12);
    }
}
