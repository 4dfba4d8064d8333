//! Standard (z-score) feature scaling.

use serde::{Deserialize, Serialize};

use fraud_spi::{FeatureScaler, FraudError, Result};

/// Column-wise standardisation: (x - mean) / std.
///
/// Columns with zero variance pass through unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
    fitted: bool,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_width(&self, sample: &[f64]) -> Result<()> {
        if sample.len() != self.means.len() {
            return Err(FraudError::DimensionMismatch {
                expected: self.means.len(),
                got: sample.len(),
            });
        }
        Ok(())
    }
}

impl FeatureScaler for StandardScaler {
    fn fit(&mut self, samples: &[Vec<f64>]) -> Result<()> {
        let n = samples.len();
        if n == 0 {
            return Err(FraudError::InsufficientData {
                required: 1,
                got: 0,
            });
        }
        let width = samples[0].len();
        if samples.iter().any(|s| s.len() != width) {
            return Err(FraudError::TrainingError(
                "ragged feature matrix".to_string(),
            ));
        }

        let mut means = vec![0.0; width];
        for sample in samples {
            for (m, &x) in means.iter_mut().zip(sample) {
                *m += x;
            }
        }
        for m in &mut means {
            *m /= n as f64;
        }

        let mut stds = vec![0.0; width];
        for sample in samples {
            for ((s, &x), &m) in stds.iter_mut().zip(sample).zip(&means) {
                *s += (x - m).powi(2);
            }
        }
        for s in &mut stds {
            *s = (*s / n as f64).sqrt();
        }

        self.means = means;
        self.stds = stds;
        self.fitted = true;
        Ok(())
    }

    fn transform(&self, sample: &[f64]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(FraudError::NotTrained);
        }
        self.check_width(sample)?;
        Ok(sample
            .iter()
            .zip(self.means.iter().zip(&self.stds))
            .map(|(&x, (&m, &s))| if s > 0.0 { (x - m) / s } else { x })
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_transform_centers_and_scales() {
        let samples = vec![vec![1.0, 10.0], vec![3.0, 10.0], vec![5.0, 10.0]];
        let mut scaler = StandardScaler::new();
        scaler.fit(&samples).unwrap();

        let scaled = scaler.transform(&[3.0, 10.0]).unwrap();
        assert!(scaled[0].abs() < 1e-12);
        // Constant column passes through untouched.
        assert_eq!(scaled[1], 10.0);

        let scaled = scaler.transform(&[5.0, 10.0]).unwrap();
        assert!((scaled[0] - 1.224_744_871_391_589).abs() < 1e-9);
    }

    #[test]
    fn test_transform_before_fit_fails() {
        let scaler = StandardScaler::new();
        assert!(matches!(
            scaler.transform(&[1.0]),
            Err(FraudError::NotTrained)
        ));
    }

    #[test]
    fn test_width_mismatch_rejected() {
        let mut scaler = StandardScaler::new();
        scaler.fit(&[vec![1.0, 2.0], vec![2.0, 3.0]]).unwrap();
        assert!(matches!(
            scaler.transform(&[1.0]),
            Err(FraudError::DimensionMismatch { expected: 2, got: 1 })
        ));
    }

    #[test]
    fn test_empty_fit_rejected() {
        let mut scaler = StandardScaler::new();
        assert!(scaler.fit(&[]).is_err());
    }
}
