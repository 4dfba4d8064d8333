pub mod plan;
pub mod profile;

pub use plan::{Allocation, AllocationPlan};
pub use profile::{AllocationProfile, MarketCondition, RiskTolerance};
