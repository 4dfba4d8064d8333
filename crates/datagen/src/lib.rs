//! # datagen
//!
//! Seeded synthetic dataset generators with realistic distributions and
//! injected fraud/anomaly patterns. Every generator is deterministic for a
//! given seed; datasets export to CSV for training and inspection.

mod behavior;
mod compliance;
mod crisis;
mod export;
mod network;
mod transactions;

pub use behavior::{BehaviorGenerator, BehaviorRecord};
pub use compliance::{AuditLogGenerator, AuditRecord};
pub use crisis::{CrisisDatasetGenerator, CrisisRecord};
pub use export::{save_all_datasets, write_csv, DatasetSummary};
pub use network::{NetworkTrafficGenerator, PacketRecord};
pub use transactions::{feature_matrix, TransactionGenerator, TransactionRecord};

use thiserror::Error;

/// Default seed shared by all generators.
pub const DEFAULT_SEED: u64 = 42;

/// Dataset generation errors.
#[derive(Debug, Error)]
pub enum DatagenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for dataset generation.
pub type Result<T> = std::result::Result<T, DatagenError>;
