pub mod assessment;
pub mod screening;
pub mod snapshot;

pub use assessment::{HealthReport, RiskAssessment, RiskFactors, RiskLevel};
pub use screening::{
    HealthIndicators, ScreeningFinding, ScreeningProfile, ScreeningReport, Severity,
};
pub use snapshot::FinancialSnapshot;
