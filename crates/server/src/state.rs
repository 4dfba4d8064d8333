//! Shared application state and server configuration.

use std::path::PathBuf;
use std::sync::Arc;

use fraud::{EngineConfig, FraudEngine};
use tokio::sync::RwLock;

use crate::env_or;

/// Server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model_dir: PathBuf,
    pub data_dir: PathBuf,
    /// Transaction rows generated for background training.
    pub training_rows: usize,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "8080")
                .parse()
                .expect("PORT must be a valid number"),
            model_dir: PathBuf::from(env_or("MODEL_DIR", "models")),
            data_dir: PathBuf::from(env_or("DATA_DIR", "data")),
            training_rows: env_or("TRAINING_ROWS", "50000")
                .parse()
                .expect("TRAINING_ROWS must be a valid number"),
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<FraudEngine>>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let engine_config = EngineConfig::with_model_dir(&config.model_dir);
        Self {
            engine: Arc::new(RwLock::new(FraudEngine::new(engine_config))),
            config,
        }
    }

    /// Load persisted models if nothing is fitted yet.
    pub async fn ensure_models(&self) -> Result<(), fraud::FraudError> {
        if self.engine.read().await.is_ready() {
            return Ok(());
        }
        self.engine.write().await.ensure_loaded()
    }
}
