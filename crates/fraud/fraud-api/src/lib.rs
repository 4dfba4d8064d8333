//! Fraud Detection API
//!
//! Configuration types for the fraud/anomaly detection engine.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Re-export SPI types
pub use fraud_spi::{FraudError, Result};

// ============================================================================
// Random Forest Configuration
// ============================================================================

/// Random forest classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestConfig {
    /// Number of trees in the ensemble (default: 200).
    pub n_estimators: usize,
    /// Maximum tree depth (default: 15).
    pub max_depth: usize,
    /// Minimum samples required to split a node (default: 10).
    pub min_samples_split: usize,
    /// Minimum samples required at a leaf (default: 1).
    pub min_samples_leaf: usize,
    /// Reweight classes inversely to their frequency (default: true).
    pub balanced: bool,
    /// RNG seed for bootstrap sampling and feature subsets (default: 42).
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_estimators: 200,
            max_depth: 15,
            min_samples_split: 10,
            min_samples_leaf: 1,
            balanced: true,
            seed: 42,
        }
    }
}

// ============================================================================
// Isolation Forest Configuration
// ============================================================================

/// Isolation forest configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsolationConfig {
    /// Number of isolation trees (default: 100).
    pub n_estimators: usize,
    /// Subsample size per tree (default: 256).
    pub max_samples: usize,
    /// Expected anomaly fraction; shifts the decision offset (default: 0.05).
    pub contamination: f64,
    /// RNG seed for subsampling and split selection (default: 42).
    pub seed: u64,
}

impl Default for IsolationConfig {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            max_samples: 256,
            contamination: 0.05,
            seed: 42,
        }
    }
}

// ============================================================================
// Engine Configuration
// ============================================================================

/// Train/test split configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Held-out fraction (default: 0.2).
    pub test_ratio: f64,
    /// Preserve class balance across the split (default: true).
    pub stratify: bool,
    /// Shuffle seed (default: 42).
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_ratio: 0.2,
            stratify: true,
            seed: 42,
        }
    }
}

/// Fraud engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Directory for persisted models.
    pub model_dir: PathBuf,
    pub forest: ForestConfig,
    pub isolation: IsolationConfig,
    pub split: SplitConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            forest: ForestConfig::default(),
            isolation: IsolationConfig::default(),
            split: SplitConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_model_dir(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Self::default()
        }
    }
}
