//! Synthetic transaction dataset with injected fraud patterns.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution, Exp, LogNormal, Poisson};
use serde::{Deserialize, Serialize};

const MERCHANT_CATEGORIES: [&str; 5] = ["retail", "dining", "travel", "utilities", "online"];

/// Fraction of rows labelled as fraud.
const FRAUD_RATE: f64 = 0.05;

/// One labelled transaction row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction_id: String,
    pub user_id: u32,
    pub amount: f64,
    pub merchant_category: String,
    pub timestamp: DateTime<Utc>,
    pub transaction_frequency: f64,
    pub geographic_distance: f64,
    pub time_since_last_tx: f64,
    pub device_mismatch: u8,
    pub velocity_check: f64,
    pub ip_risk_score: f64,
    pub account_age_days: f64,
    pub is_fraud: u8,
}

impl TransactionRecord {
    /// Feature vector in the model's extraction order.
    pub fn features(&self) -> Vec<f64> {
        vec![
            self.amount,
            self.transaction_frequency,
            self.geographic_distance,
            self.time_since_last_tx,
            f64::from(self.device_mismatch),
            self.velocity_check,
            self.ip_risk_score,
            self.account_age_days,
        ]
    }
}

/// Feature matrix plus labels for the whole dataset.
pub fn feature_matrix(records: &[TransactionRecord]) -> (Vec<Vec<f64>>, Vec<u8>) {
    (
        records.iter().map(TransactionRecord::features).collect(),
        records.iter().map(|r| r.is_fraud).collect(),
    )
}

/// Seeded transaction dataset generator.
pub struct TransactionGenerator {
    rng: StdRng,
}

impl TransactionGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `n` rows, ~5% of which carry injected fraud patterns.
    pub fn generate(&mut self, n: usize) -> Vec<TransactionRecord> {
        let amount_dist = LogNormal::new(3.0, 2.0).expect("valid lognormal");
        let fraud_amount_dist = LogNormal::new(4.0, 2.0).expect("valid lognormal");
        let frequency_dist = Poisson::new(3.0).expect("valid poisson");
        let gap_dist = Exp::new(1.0 / 24.0).expect("valid exponential");
        let ip_dist = Beta::new(2.0, 5.0).expect("valid beta");
        let now = Utc::now();

        let mut records: Vec<TransactionRecord> = (0..n)
            .map(|i| TransactionRecord {
                transaction_id: format!("TX_{i:06}"),
                user_id: self.rng.gen_range(1..2000),
                amount: amount_dist.sample(&mut self.rng),
                merchant_category: MERCHANT_CATEGORIES
                    .choose(&mut self.rng)
                    .expect("non-empty categories")
                    .to_string(),
                timestamp: now - Duration::days(self.rng.gen_range(0..365)),
                transaction_frequency: frequency_dist.sample(&mut self.rng),
                geographic_distance: self.rng.gen_range(0.0..1000.0),
                time_since_last_tx: gap_dist.sample(&mut self.rng),
                device_mismatch: u8::from(self.rng.gen_bool(0.2)),
                velocity_check: self.rng.gen_range(0.0..10.0),
                ip_risk_score: ip_dist.sample(&mut self.rng) * 100.0,
                account_age_days: self.rng.gen_range(1.0..3650.0),
                is_fraud: 0,
            })
            .collect();

        // Pick the fraud rows, then overwrite them with fraud patterns:
        // larger amounts, far-away locations and high velocity.
        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(&mut self.rng);
        for &i in indices.iter().take((n as f64 * FRAUD_RATE) as usize) {
            let record = &mut records[i];
            record.is_fraud = 1;
            record.amount = fraud_amount_dist.sample(&mut self.rng);
            record.geographic_distance = self.rng.gen_range(500.0..2000.0);
            record.velocity_check = self.rng.gen_range(5.0..15.0);
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraud_rate_is_five_percent() {
        let records = TransactionGenerator::new(42).generate(2000);
        let frauds = records.iter().filter(|r| r.is_fraud == 1).count();
        assert_eq!(frauds, 100);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = TransactionGenerator::new(7).generate(50);
        let b = TransactionGenerator::new(7).generate(50);
        assert_eq!(a[10].amount, b[10].amount);
        assert_eq!(a[49].user_id, b[49].user_id);
    }

    #[test]
    fn test_value_ranges() {
        let records = TransactionGenerator::new(42).generate(500);
        for record in &records {
            assert!(record.amount > 0.0);
            assert!((0.0..=100.0).contains(&record.ip_risk_score));
            assert!((1.0..3650.0).contains(&record.account_age_days));
            if record.is_fraud == 1 {
                assert!((500.0..2000.0).contains(&record.geographic_distance));
                assert!((5.0..15.0).contains(&record.velocity_check));
            } else {
                assert!(record.geographic_distance < 1000.0);
            }
        }
    }

    #[test]
    fn test_feature_matrix_shape() {
        let records = TransactionGenerator::new(42).generate(100);
        let (features, labels) = feature_matrix(&records);
        assert_eq!(features.len(), 100);
        assert_eq!(labels.len(), 100);
        assert!(features.iter().all(|f| f.len() == 8));
    }
}
