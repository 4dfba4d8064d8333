//! Estimator trait definitions.

use crate::error::Result;

/// Binary classifier over fixed-width feature vectors.
///
/// Implementations learn from labelled samples and expose class
/// probabilities for the positive class.
pub trait Classifier: Send + Sync {
    /// Fit the classifier to training samples and binary labels.
    fn fit(&mut self, samples: &[Vec<f64>], labels: &[u8]) -> Result<()>;

    /// Probability of the positive class for one sample.
    fn predict_proba(&self, sample: &[f64]) -> Result<f64>;

    /// Hard class prediction (true = positive class).
    fn predict(&self, sample: &[f64]) -> Result<bool> {
        Ok(self.predict_proba(sample)? >= 0.5)
    }

    /// Check if the classifier has been fitted.
    fn is_fitted(&self) -> bool;
}

/// Unsupervised outlier detector over fixed-width feature vectors.
pub trait OutlierDetector: Send + Sync {
    /// Fit the detector to unlabelled training samples.
    fn fit(&mut self, samples: &[Vec<f64>]) -> Result<()>;

    /// Raw anomaly score in [-1, 0]; lower is more anomalous.
    fn score_samples(&self, sample: &[f64]) -> Result<f64>;

    /// Offset-adjusted score; negative values are outliers.
    fn decision_function(&self, sample: &[f64]) -> Result<f64>;

    /// Whether the sample falls below the decision threshold.
    fn is_outlier(&self, sample: &[f64]) -> Result<bool> {
        Ok(self.decision_function(sample)? < 0.0)
    }

    /// Check if the detector has been fitted.
    fn is_fitted(&self) -> bool;
}

/// Column-wise feature scaling.
pub trait FeatureScaler: Send + Sync {
    /// Learn scaling parameters from training samples.
    fn fit(&mut self, samples: &[Vec<f64>]) -> Result<()>;

    /// Scale a single sample in place.
    fn transform(&self, sample: &[f64]) -> Result<Vec<f64>>;

    /// Scale a batch of samples.
    fn transform_batch(&self, samples: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        samples.iter().map(|s| self.transform(s)).collect()
    }

    /// Check if the scaler has been fitted.
    fn is_fitted(&self) -> bool;
}
