//! Predictive Analytics Service Provider Interface
//!
//! Defines traits and types for financial predictions and simulations.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::PredictiveModel;
pub use error::{PredictionError, Result};
pub use model::{
    CareerInsights, CrisisOutlook, CrisisProfile, CrisisScenario, ExpenseIncreaseScenario,
    IncomeRange, InvestmentReturnScenario, JobLossScenario, MonthlyProjection, Prediction,
    PredictionKind, RaiseScenario, RiskRating, RiskTolerance, ScenarioAnalysis, StabilityFactors,
    TimeHorizon, UserData, VolatilityProfile, VolatilityReport, WhatIfOutcome, WhatIfRequest,
    WhatIfScenarios, YearBand,
};
