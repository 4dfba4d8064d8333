//! # prediction-core
//!
//! Predictive analytics implementations: the per-kind prediction models,
//! crisis simulation, income volatility analysis and the what-if Monte
//! Carlo simulator.

mod crisis;
mod models;
mod volatility;
mod whatif;

pub use crisis::simulate_crisis;
pub use models::{predict, LayoffModel, SavingsModel, SurvivalModel};
pub use volatility::analyze_volatility;
pub use whatif::simulate_what_if;
