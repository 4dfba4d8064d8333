//! Allocation plan types.

use serde::{Deserialize, Serialize};

/// Budget-bucket percentages; normalised to sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Allocation {
    pub sip_percentage: f64,
    pub stocks_percentage: f64,
    pub bonds_percentage: f64,
    pub lifestyle_percentage: f64,
    pub emergency_fund_percentage: f64,
}

impl Allocation {
    pub fn total(&self) -> f64 {
        self.sip_percentage
            + self.stocks_percentage
            + self.bonds_percentage
            + self.lifestyle_percentage
            + self.emergency_fund_percentage
    }

    /// Scale all buckets so they sum to 100. Left untouched when the total
    /// is ~0.
    pub fn normalize(&mut self) {
        let total = self.total();
        if total.abs() < 0.01 {
            return;
        }
        let factor = 100.0 / total;
        self.sip_percentage *= factor;
        self.stocks_percentage *= factor;
        self.bonds_percentage *= factor;
        self.lifestyle_percentage *= factor;
        self.emergency_fund_percentage *= factor;
    }
}

/// An allocation with the reasoning that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationPlan {
    pub allocation: Allocation,
    pub reasoning: Vec<String>,
    pub confidence: f64,
    pub market_context: String,
    pub risk_adjustment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sums_to_100() {
        let mut allocation = Allocation {
            sip_percentage: 35.0,
            stocks_percentage: 18.0,
            bonds_percentage: 20.0,
            lifestyle_percentage: 17.0,
            emergency_fund_percentage: 15.0,
        };
        allocation.normalize();
        assert!((allocation.total() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_skips_zero_total() {
        let mut allocation = Allocation {
            sip_percentage: 0.0,
            stocks_percentage: 0.0,
            bonds_percentage: 0.0,
            lifestyle_percentage: 0.0,
            emergency_fund_percentage: 0.0,
        };
        allocation.normalize();
        assert_eq!(allocation.total(), 0.0);
    }
}
