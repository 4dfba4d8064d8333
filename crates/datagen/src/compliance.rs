//! Synthetic compliance audit log dataset.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const ACTIONS: [&str; 6] = ["CREATE", "READ", "UPDATE", "DELETE", "EXPORT", "ENCRYPT"];
const RESOURCES: [&str; 4] = [
    "financial_data",
    "medical_record",
    "identity_info",
    "transaction",
];
const USER_ROLES: [&str; 4] = ["admin", "analyst", "user", "guest"];

/// One audit log row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    pub audit_id: String,
    pub user_id: u32,
    pub action: String,
    pub resource: String,
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
    pub user_role: String,
    pub status: String,
    pub encrypted: bool,
}

/// Seeded compliance audit log generator.
pub struct AuditLogGenerator {
    rng: StdRng,
}

impl AuditLogGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, n: usize) -> Vec<AuditRecord> {
        let now = Utc::now();
        (0..n)
            .map(|i| AuditRecord {
                audit_id: format!("AUD_{i:06}"),
                user_id: self.rng.gen_range(1..500),
                action: ACTIONS
                    .choose(&mut self.rng)
                    .expect("non-empty actions")
                    .to_string(),
                resource: RESOURCES
                    .choose(&mut self.rng)
                    .expect("non-empty resources")
                    .to_string(),
                timestamp: now - Duration::days(self.rng.gen_range(0..365)),
                ip_address: format!(
                    "192.168.{}.{}",
                    self.rng.gen_range(0..=255u8),
                    self.rng.gen_range(0..=255u8)
                ),
                user_role: USER_ROLES
                    .choose(&mut self.rng)
                    .expect("non-empty roles")
                    .to_string(),
                status: self.sample_status(),
                encrypted: self.rng.gen_bool(0.9),
            })
            .collect()
    }

    /// SUCCESS/FAILURE/PARTIAL at 80/15/5.
    fn sample_status(&mut self) -> String {
        let roll: f64 = self.rng.gen();
        if roll < 0.8 {
            "SUCCESS"
        } else if roll < 0.95 {
            "FAILURE"
        } else {
            "PARTIAL"
        }
        .to_string()
    }
}
