pub mod crisis;
pub mod prediction;
pub mod user_data;
pub mod volatility;
pub mod whatif;

pub use crisis::{
    CrisisOutlook, CrisisProfile, CrisisScenario, MonthlyProjection, RiskRating, ScenarioAnalysis,
};
pub use prediction::{Prediction, PredictionKind, TimeHorizon};
pub use user_data::UserData;
pub use volatility::{CareerInsights, IncomeRange, StabilityFactors, VolatilityProfile, VolatilityReport};
pub use whatif::{
    ExpenseIncreaseScenario, InvestmentReturnScenario, JobLossScenario, RaiseScenario,
    RiskTolerance, WhatIfOutcome, WhatIfRequest, WhatIfScenarios, YearBand,
};
