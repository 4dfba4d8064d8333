//! Transaction record and feature extraction.

use serde::{Deserialize, Serialize};

/// Names of the model features, in extraction order.
pub const FEATURE_NAMES: [&str; 8] = [
    "transaction_amount",
    "transaction_frequency",
    "geographic_distance",
    "time_since_last_tx",
    "device_mismatch",
    "velocity_check",
    "ip_risk_score",
    "account_age_days",
];

/// A transaction submitted for fraud/anomaly scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    /// Transaction amount.
    pub amount: f64,
    /// Transactions per day for this account.
    pub frequency: f64,
    /// Distance in km from the account's usual location.
    pub geographic_distance: f64,
    /// Hours since the previous transaction.
    pub time_since_last_tx: f64,
    /// 1 when the device differs from the account's known devices.
    pub device_mismatch: u8,
    /// Velocity check score (transactions per window).
    pub velocity_check: f64,
    /// IP reputation score, 0-100.
    pub ip_risk_score: f64,
    /// Account age in days.
    pub account_age_days: f64,
}

impl Transaction {
    /// Assemble the feature vector in [`FEATURE_NAMES`] order.
    pub fn features(&self) -> Vec<f64> {
        vec![
            self.amount,
            self.frequency,
            self.geographic_distance,
            self.time_since_last_tx,
            f64::from(self.device_mismatch),
            self.velocity_check,
            self.ip_risk_score,
            self.account_age_days,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction {
            id: "TX_000001".to_string(),
            user_id: "42".to_string(),
            amount: 120.5,
            frequency: 3.0,
            geographic_distance: 12.0,
            time_since_last_tx: 6.5,
            device_mismatch: 1,
            velocity_check: 2.0,
            ip_risk_score: 18.0,
            account_age_days: 900.0,
        }
    }

    #[test]
    fn test_feature_order_matches_names() {
        let features = sample().features();
        assert_eq!(features.len(), FEATURE_NAMES.len());
        assert_eq!(features[0], 120.5);
        assert_eq!(features[4], 1.0);
        assert_eq!(features[7], 900.0);
    }

    #[test]
    fn test_roundtrip_serde() {
        let tx = sample();
        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, tx.id);
        assert_eq!(back.features(), tx.features());
    }
}
