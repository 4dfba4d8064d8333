//! CSV export for the generated datasets.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::{
    AuditLogGenerator, BehaviorGenerator, CrisisDatasetGenerator, NetworkTrafficGenerator,
    Result, TransactionGenerator,
};

/// Write any serialisable row set to a CSV file.
pub fn write_csv<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Row counts written per dataset.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DatasetSummary {
    pub transactions: usize,
    pub network_traffic: usize,
    pub user_behavior: usize,
    pub compliance_audit: usize,
    pub financial_crisis: usize,
}

impl DatasetSummary {
    pub fn total(&self) -> usize {
        self.transactions
            + self.network_traffic
            + self.user_behavior
            + self.compliance_audit
            + self.financial_crisis
    }
}

impl Default for DatasetSummary {
    fn default() -> Self {
        Self {
            transactions: 50_000,
            network_traffic: 30_000,
            user_behavior: 25_000,
            compliance_audit: 10_000,
            financial_crisis: 50_000,
        }
    }
}

/// Generate every dataset and write them under `output_dir`.
pub fn save_all_datasets(output_dir: &Path, seed: u64, counts: DatasetSummary) -> Result<DatasetSummary> {
    fs::create_dir_all(output_dir)?;

    let transactions = TransactionGenerator::new(seed).generate(counts.transactions);
    write_csv(&output_dir.join("transactions.csv"), &transactions)?;

    let traffic = NetworkTrafficGenerator::new(seed).generate(counts.network_traffic);
    write_csv(&output_dir.join("network_traffic.csv"), &traffic)?;

    let behavior = BehaviorGenerator::new(seed).generate(counts.user_behavior);
    write_csv(&output_dir.join("user_behavior.csv"), &behavior)?;

    let audits = AuditLogGenerator::new(seed).generate(counts.compliance_audit);
    write_csv(&output_dir.join("compliance_audit.csv"), &audits)?;

    let crises = CrisisDatasetGenerator::new(seed).generate(counts.financial_crisis);
    write_csv(&output_dir.join("financial_crisis.csv"), &crises)?;

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_all_writes_five_files() {
        let dir = tempfile::tempdir().unwrap();
        let counts = DatasetSummary {
            transactions: 50,
            network_traffic: 40,
            user_behavior: 30,
            compliance_audit: 20,
            financial_crisis: 10,
        };
        let written = save_all_datasets(dir.path(), 42, counts).unwrap();
        assert_eq!(written.total(), 150);

        for name in [
            "transactions.csv",
            "network_traffic.csv",
            "user_behavior.csv",
            "compliance_audit.csv",
            "financial_crisis.csv",
        ] {
            let path = dir.path().join(name);
            assert!(path.exists(), "{name} missing");
            let content = fs::read_to_string(path).unwrap();
            // Header plus at least one row.
            assert!(content.lines().count() > 1);
        }
    }

    #[test]
    fn test_csv_has_expected_transaction_header() {
        let dir = tempfile::tempdir().unwrap();
        let records = TransactionGenerator::new(42).generate(5);
        let path = dir.path().join("tx.csv");
        write_csv(&path, &records).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let header = content.lines().next().unwrap();
        assert!(header.starts_with("transaction_id,user_id,amount"));
        assert!(header.ends_with("is_fraud"));
    }
}
