//! Financial snapshot input type.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};

/// Upper bound accepted for any monetary input.
pub const MAX_AMOUNT: f64 = 1e10;

/// Monthly financial snapshot used for risk scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    /// Monthly income.
    pub income: f64,
    /// Monthly expenses.
    pub expenses: f64,
    /// Current savings amount.
    pub savings: f64,
    /// Current debt amount.
    pub debt: f64,
}

impl FinancialSnapshot {
    /// Validate all fields are finite, non-negative and plausibly sized,
    /// and that income is strictly positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("income", self.income),
            ("expenses", self.expenses),
            ("savings", self.savings),
            ("debt", self.debt),
        ] {
            if !value.is_finite() {
                return Err(RiskError::invalid(name, "must be a finite number"));
            }
            if !(0.0..=MAX_AMOUNT).contains(&value) {
                return Err(RiskError::invalid(
                    name,
                    "must be non-negative and reasonable",
                ));
            }
        }
        if self.income <= 0.0 {
            return Err(RiskError::invalid("income", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> FinancialSnapshot {
        FinancialSnapshot {
            income: 50_000.0,
            expenses: 30_000.0,
            savings: 10_000.0,
            debt: 5_000.0,
        }
    }

    #[test]
    fn test_valid_snapshot_passes() {
        assert!(snapshot().validate().is_ok());
    }

    #[test]
    fn test_nan_rejected() {
        let mut s = snapshot();
        s.expenses = f64::NAN;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_oversized_value_rejected() {
        let mut s = snapshot();
        s.savings = 1e11;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_zero_income_rejected() {
        let mut s = snapshot();
        s.income = 0.0;
        assert!(s.validate().is_err());
    }
}
