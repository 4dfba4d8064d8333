//! Allocation planner trait definition.

use crate::error::Result;
use crate::model::{AllocationPlan, AllocationProfile};

/// Allocation planner trait.
///
/// Implementations turn a user's financial profile into recommended
/// budget-bucket percentages with reasoning.
pub trait AllocationPlanner: Send + Sync {
    /// Produce an allocation plan for the profile.
    fn optimize(&self, profile: &AllocationProfile) -> Result<AllocationPlan>;
}
