//! Synthetic network traffic dataset with injected intrusion patterns.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp, Gamma};
use serde::{Deserialize, Serialize};

const PROTOCOLS: [&str; 4] = ["TCP", "UDP", "ICMP", "HTTP"];
const PORTS: [u16; 7] = [22, 80, 443, 3306, 5432, 8080, 9200];
const FLAGS: [&str; 5] = ["SYN", "ACK", "FIN", "RST", "PSH"];

const ANOMALY_RATE: f64 = 0.05;

/// One labelled traffic row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacketRecord {
    pub packet_id: String,
    pub source_ip: String,
    pub destination_ip: String,
    pub packet_size: f64,
    pub protocol: String,
    pub port_number: u16,
    pub flags: String,
    pub packet_rate: f64,
    pub byte_rate: f64,
    pub duration: f64,
    pub timestamp: DateTime<Utc>,
    pub is_anomaly: u8,
}

impl PacketRecord {
    /// Numeric features used for unsupervised detection.
    pub fn features(&self) -> Vec<f64> {
        vec![
            self.packet_size,
            self.packet_rate,
            self.byte_rate,
            self.duration,
        ]
    }
}

/// Seeded network traffic generator.
pub struct NetworkTrafficGenerator {
    rng: StdRng,
}

impl NetworkTrafficGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `n` rows, ~5% of which look like floods or port scans.
    pub fn generate(&mut self, n: usize) -> Vec<PacketRecord> {
        let size_dist = Gamma::new(50.0, 2.0).expect("valid gamma");
        let rate_dist = Exp::new(1.0 / 100.0).expect("valid exponential");
        let byte_dist = Exp::new(1.0 / 10_000.0).expect("valid exponential");
        let flood_rate_dist = Exp::new(1.0 / 1_000.0).expect("valid exponential");
        let flood_byte_dist = Exp::new(1.0 / 100_000.0).expect("valid exponential");
        let now = Utc::now();

        let mut records: Vec<PacketRecord> = (0..n)
            .map(|i| PacketRecord {
                packet_id: format!("PKT_{i:06}"),
                source_ip: format!(
                    "192.168.{}.{}",
                    self.rng.gen_range(0..=255u8),
                    self.rng.gen_range(0..=255u8)
                ),
                destination_ip: format!(
                    "10.0.{}.{}",
                    self.rng.gen_range(0..=255u8),
                    self.rng.gen_range(0..=255u8)
                ),
                packet_size: size_dist.sample(&mut self.rng),
                protocol: PROTOCOLS
                    .choose(&mut self.rng)
                    .expect("non-empty protocols")
                    .to_string(),
                port_number: *PORTS.choose(&mut self.rng).expect("non-empty ports"),
                flags: FLAGS
                    .choose(&mut self.rng)
                    .expect("non-empty flags")
                    .to_string(),
                packet_rate: rate_dist.sample(&mut self.rng),
                byte_rate: byte_dist.sample(&mut self.rng),
                duration: self.rng.gen_range(0.001..10.0),
                timestamp: now - Duration::seconds(self.rng.gen_range(0..86_400)),
                is_anomaly: 0,
            })
            .collect();

        // Anomalies: 10x traffic rates on ephemeral ports.
        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(&mut self.rng);
        for &i in indices.iter().take((n as f64 * ANOMALY_RATE) as usize) {
            let record = &mut records[i];
            record.is_anomaly = 1;
            record.packet_rate = flood_rate_dist.sample(&mut self.rng);
            record.byte_rate = flood_byte_dist.sample(&mut self.rng);
            record.port_number = self.rng.gen_range(49_152..65_535);
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anomaly_rate() {
        let records = NetworkTrafficGenerator::new(42).generate(1000);
        let anomalies = records.iter().filter(|r| r.is_anomaly == 1).count();
        assert_eq!(anomalies, 50);
    }

    #[test]
    fn test_anomalies_use_ephemeral_ports() {
        let records = NetworkTrafficGenerator::new(42).generate(1000);
        for record in records.iter().filter(|r| r.is_anomaly == 1) {
            assert!(record.port_number >= 49_152);
        }
    }

    #[test]
    fn test_features_are_four_wide() {
        let records = NetworkTrafficGenerator::new(42).generate(10);
        assert!(records.iter().all(|r| r.features().len() == 4));
    }
}
