//! Synthetic user behaviour dataset with injected suspicious patterns.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp, Poisson};
use serde::{Deserialize, Serialize};

const ACTION_TYPES: [&str; 5] = ["login", "logout", "password_change", "data_access", "export"];
const SUSPICIOUS_ACTIONS: [&str; 2] = ["data_access", "export"];
const COUNTRIES: [&str; 6] = ["US", "UK", "India", "China", "Russia", "Unknown"];
const DEVICE_TYPES: [&str; 3] = ["Desktop", "Mobile", "Tablet"];

const SUSPICIOUS_RATE: f64 = 0.05;

/// One labelled user behaviour event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorRecord {
    pub event_id: String,
    pub user_id: u32,
    pub action_type: String,
    pub timestamp: DateTime<Utc>,
    pub login_attempts: f64,
    pub failed_logins: f64,
    pub time_of_day: f64,
    pub day_of_week: u8,
    pub location_country: String,
    pub device_type: String,
    pub session_duration: f64,
    pub is_suspicious: u8,
}

/// Seeded user behaviour generator.
pub struct BehaviorGenerator {
    rng: StdRng,
}

impl BehaviorGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `n` events, ~5% showing off-hours exfiltration patterns.
    pub fn generate(&mut self, n: usize) -> Vec<BehaviorRecord> {
        let attempts_dist = Poisson::new(1.0).expect("valid poisson");
        let failures_dist = Poisson::new(0.1).expect("valid poisson");
        let burst_failures_dist = Poisson::new(5.0).expect("valid poisson");
        let session_dist = Exp::new(1.0 / 3600.0).expect("valid exponential");
        let now = Utc::now();

        let mut records: Vec<BehaviorRecord> = (0..n)
            .map(|i| BehaviorRecord {
                event_id: format!("EVT_{i:06}"),
                user_id: self.rng.gen_range(1..1000),
                action_type: ACTION_TYPES
                    .choose(&mut self.rng)
                    .expect("non-empty actions")
                    .to_string(),
                timestamp: now - Duration::hours(self.rng.gen_range(0..168)),
                login_attempts: attempts_dist.sample(&mut self.rng),
                failed_logins: failures_dist.sample(&mut self.rng),
                time_of_day: self.rng.gen_range(0.0..24.0),
                day_of_week: self.rng.gen_range(0..7),
                location_country: COUNTRIES
                    .choose(&mut self.rng)
                    .expect("non-empty countries")
                    .to_string(),
                device_type: DEVICE_TYPES
                    .choose(&mut self.rng)
                    .expect("non-empty devices")
                    .to_string(),
                session_duration: session_dist.sample(&mut self.rng),
                is_suspicious: 0,
            })
            .collect();

        // Suspicious events: off-hours access bursts against data exports.
        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(&mut self.rng);
        for &i in indices.iter().take((n as f64 * SUSPICIOUS_RATE) as usize) {
            let record = &mut records[i];
            record.is_suspicious = 1;
            record.time_of_day = self.rng.gen_range(0.0..6.0);
            record.failed_logins = burst_failures_dist.sample(&mut self.rng);
            record.action_type = SUSPICIOUS_ACTIONS
                .choose(&mut self.rng)
                .expect("non-empty actions")
                .to_string();
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suspicious_rate() {
        let records = BehaviorGenerator::new(42).generate(1000);
        let suspicious = records.iter().filter(|r| r.is_suspicious == 1).count();
        assert_eq!(suspicious, 50);
    }

    #[test]
    fn test_suspicious_events_are_off_hours_exports() {
        let records = BehaviorGenerator::new(42).generate(1000);
        for record in records.iter().filter(|r| r.is_suspicious == 1) {
            assert!(record.time_of_day < 6.0);
            assert!(SUSPICIOUS_ACTIONS.contains(&record.action_type.as_str()));
        }
    }
}
