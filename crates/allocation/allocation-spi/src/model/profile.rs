//! Allocation input types.

use serde::{Deserialize, Serialize};

use crate::error::{AllocationError, Result};

/// User risk tolerance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Medium => "medium",
            RiskTolerance::High => "high",
        }
    }
}

/// Market condition classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCondition {
    Bull,
    Bear,
    Neutral,
}

impl MarketCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketCondition::Bull => "bull",
            MarketCondition::Bear => "bear",
            MarketCondition::Neutral => "neutral",
        }
    }
}

/// Financial profile submitted for allocation planning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationProfile {
    /// Monthly income.
    pub income: f64,
    /// Monthly expenses.
    pub expenses: f64,
    pub emergency_fund: f64,
    /// Total debt.
    pub debt: f64,
    pub age: u32,
    pub risk_tolerance: RiskTolerance,
    /// Job stability score, 1-10.
    pub job_stability: f64,
    pub market_conditions: MarketCondition,
    /// Expected inflation rate, percent.
    #[serde(default = "default_inflation")]
    pub inflation_rate: f64,
}

fn default_inflation() -> f64 {
    3.5
}

impl AllocationProfile {
    /// Validate numeric ranges before planning.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("income", self.income),
            ("expenses", self.expenses),
            ("emergency_fund", self.emergency_fund),
            ("debt", self.debt),
            ("job_stability", self.job_stability),
            ("inflation_rate", self.inflation_rate),
        ] {
            if !value.is_finite() {
                return Err(AllocationError::invalid(name, "must be a finite number"));
            }
        }
        if self.income <= 0.0 {
            return Err(AllocationError::invalid("income", "must be positive"));
        }
        if self.expenses < 0.0 || self.emergency_fund < 0.0 || self.debt < 0.0 {
            return Err(AllocationError::invalid(
                "amounts",
                "must be non-negative",
            ));
        }
        if !(18..=100).contains(&self.age) {
            return Err(AllocationError::invalid("age", "must be between 18 and 100"));
        }
        if !(1.0..=10.0).contains(&self.job_stability) {
            return Err(AllocationError::invalid(
                "job_stability",
                "must be between 1 and 10",
            ));
        }
        if !(0.0..=20.0).contains(&self.inflation_rate) {
            return Err(AllocationError::invalid(
                "inflation_rate",
                "must be between 0 and 20",
            ));
        }
        Ok(())
    }

    /// Months of expenses the emergency fund covers.
    pub fn emergency_fund_months(&self) -> f64 {
        if self.expenses <= 0.0 {
            return 0.0;
        }
        self.emergency_fund / self.expenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AllocationProfile {
        AllocationProfile {
            income: 50_000.0,
            expenses: 30_000.0,
            emergency_fund: 60_000.0,
            debt: 10_000.0,
            age: 35,
            risk_tolerance: RiskTolerance::Medium,
            job_stability: 8.0,
            market_conditions: MarketCondition::Neutral,
            inflation_rate: 3.5,
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn test_age_bounds() {
        let mut p = profile();
        p.age = 17;
        assert!(p.validate().is_err());
        p.age = 101;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_emergency_fund_months() {
        assert!((profile().emergency_fund_months() - 2.0).abs() < 1e-12);
        let mut p = profile();
        p.expenses = 0.0;
        assert_eq!(p.emergency_fund_months(), 0.0);
    }

    #[test]
    fn test_enum_wire_format() {
        let json = serde_json::to_string(&RiskTolerance::High).unwrap();
        assert_eq!(json, "\"high\"");
        let back: MarketCondition = serde_json::from_str("\"bear\"").unwrap();
        assert_eq!(back, MarketCondition::Bear);
    }
}
