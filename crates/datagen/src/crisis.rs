//! Synthetic financial crisis profile dataset.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution, Normal};
use serde::{Deserialize, Serialize};

const SCENARIOS: [&str; 6] = [
    "job_loss",
    "medical_emergency",
    "market_crash",
    "inflation_spike",
    "debt_crisis",
    "business_failure",
];

/// One simulated household crisis outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisRecord {
    pub user_id: String,
    pub age: f64,
    pub income_bracket: String,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub emergency_fund_months: f64,
    pub total_debt: f64,
    pub debt_to_income_ratio: f64,
    pub savings_rate: f64,
    pub crisis_scenario: String,
    pub crisis_severity: f64,
    pub income_loss_percentage: f64,
    pub expense_increase_percentage: f64,
    pub survival_months: f64,
    pub financial_stress_score: f64,
    pub recovery_months: u32,
    pub will_default: u8,
    pub needs_intervention: u8,
    pub timestamp: DateTime<Utc>,
}

impl CrisisRecord {
    /// Numeric features used by the anomaly detector.
    pub fn features(&self) -> Vec<f64> {
        vec![
            self.monthly_income,
            self.monthly_expenses,
            self.emergency_fund_months,
            self.debt_to_income_ratio,
            self.savings_rate,
            self.crisis_severity,
            self.income_loss_percentage,
            self.expense_increase_percentage,
            self.survival_months,
            self.financial_stress_score,
        ]
    }
}

/// Seeded crisis dataset generator.
pub struct CrisisDatasetGenerator {
    rng: StdRng,
}

impl CrisisDatasetGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, n: usize) -> Vec<CrisisRecord> {
        let age_dist = Normal::<f64>::new(35.0, 12.0).expect("valid normal");
        let severity_dist = Beta::new(2.0, 5.0).expect("valid beta");
        let now = Utc::now();

        (0..n)
            .map(|i| {
                let age = age_dist.sample(&mut self.rng).clamp(22.0, 65.0);
                let bracket = self.income_bracket(age);
                let monthly_income = self.income_for(bracket);
                let scenario = *SCENARIOS.choose(&mut self.rng).expect("non-empty scenarios");
                let severity = severity_dist.sample(&mut self.rng);

                let monthly_expenses = self.expenses_for(monthly_income, scenario);
                let emergency_fund = self.rng.gen_range(0.0..12.0) * monthly_income;
                let total_debt = self.rng.gen_range(0.0..5.0) * monthly_income;

                let income_loss = income_loss(scenario, severity, age);
                let expense_increase = expense_increase(scenario, severity);
                let post_income = monthly_income * (1.0 - income_loss);
                let post_expenses = monthly_expenses * (1.0 + expense_increase);

                let survival_months = emergency_fund / post_expenses;
                let debt_to_income = total_debt / monthly_income;
                let savings_rate = (monthly_income - monthly_expenses) / monthly_income;
                let stress = financial_stress(post_income, post_expenses, total_debt);
                let skills = self.rng.gen_range(0.3..1.0);

                CrisisRecord {
                    user_id: format!("USER_{i:06}"),
                    age,
                    income_bracket: bracket.to_string(),
                    monthly_income,
                    monthly_expenses,
                    emergency_fund_months: emergency_fund / monthly_income,
                    total_debt,
                    debt_to_income_ratio: debt_to_income,
                    savings_rate,
                    crisis_scenario: scenario.to_string(),
                    crisis_severity: severity,
                    income_loss_percentage: income_loss,
                    expense_increase_percentage: expense_increase,
                    survival_months,
                    financial_stress_score: stress,
                    recovery_months: recovery_time(scenario, severity, age, skills),
                    will_default: u8::from(survival_months < 3.0 && debt_to_income > 0.5),
                    needs_intervention: u8::from(stress > 0.8),
                    timestamp: now - Duration::days(self.rng.gen_range(0..730)),
                }
            })
            .collect()
    }

    fn income_bracket(&mut self, age: f64) -> &'static str {
        let pool: &[&str] = if age < 30.0 {
            &["entry_level", "junior"]
        } else if age < 45.0 {
            &["mid_level", "senior"]
        } else {
            &["senior", "executive"]
        };
        *pool.choose(&mut self.rng).expect("non-empty pool")
    }

    fn income_for(&mut self, bracket: &str) -> f64 {
        let base = match bracket {
            "entry_level" => 25_000.0,
            "junior" => 35_000.0,
            "mid_level" => 60_000.0,
            "senior" => 120_000.0,
            _ => 250_000.0,
        };
        let dist = Normal::<f64>::new(base, base * 0.2).expect("valid normal");
        dist.sample(&mut self.rng).max(base * 0.2)
    }

    fn expenses_for(&mut self, income: f64, scenario: &str) -> f64 {
        let multiplier = match scenario {
            "medical_emergency" => 1.5,
            "inflation_spike" => 1.3,
            "job_loss" => 0.8,
            "market_crash" => 0.9,
            "debt_crisis" => 1.2,
            "business_failure" => 0.85,
            _ => 1.0,
        };
        income * 0.7 * multiplier * self.rng.gen_range(0.8..1.2)
    }
}

fn income_loss(scenario: &str, severity: f64, age: f64) -> f64 {
    let base = match scenario {
        "job_loss" => 1.0,
        "business_failure" => 0.8,
        "market_crash" => 0.3,
        "medical_emergency" => 0.2,
        "inflation_spike" => 0.1,
        "debt_crisis" => 0.15,
        _ => 0.2,
    };
    let age_factor = if age < 45.0 { 1.0 } else { 1.2 };
    (base * severity * age_factor).min(1.0)
}

fn expense_increase(scenario: &str, severity: f64) -> f64 {
    let base = match scenario {
        "medical_emergency" => 2.0,
        "inflation_spike" => 1.5,
        "debt_crisis" => 0.8,
        "job_loss" => -0.3,
        "market_crash" => 0.2,
        "business_failure" => 0.1,
        _ => 0.1,
    };
    base * severity
}

fn financial_stress(income: f64, expenses: f64, debt: f64) -> f64 {
    if income <= 0.0 {
        return 1.0;
    }
    let expense_ratio = expenses / income;
    let debt_service_ratio = debt * 0.1 / income;
    ((expense_ratio + debt_service_ratio) / 2.0).min(1.0)
}

fn recovery_time(scenario: &str, severity: f64, age: f64, skills: f64) -> u32 {
    let base: f64 = match scenario {
        "job_loss" => 6.0,
        "medical_emergency" => 3.0,
        "market_crash" => 12.0,
        "inflation_spike" => 24.0,
        "debt_crisis" => 18.0,
        "business_failure" => 24.0,
        _ => 12.0,
    };
    let age_factor = if age < 40.0 { 1.0 } else { 1.5 };
    let skills_factor = 2.0 - skills;
    (base * severity * age_factor * skills_factor) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_internally_consistent() {
        let records = CrisisDatasetGenerator::new(42).generate(500);
        for record in &records {
            assert!(record.monthly_income > 0.0);
            assert!((22.0..=65.0).contains(&record.age));
            assert!((0.0..=1.0).contains(&record.crisis_severity));
            assert!((0.0..=1.0).contains(&record.financial_stress_score));
            assert!(record.features().len() == 10);
            if record.will_default == 1 {
                assert!(record.survival_months < 3.0);
                assert!(record.debt_to_income_ratio > 0.5);
            }
        }
    }

    #[test]
    fn test_scenarios_all_appear() {
        let records = CrisisDatasetGenerator::new(42).generate(2000);
        for scenario in SCENARIOS {
            assert!(
                records.iter().any(|r| r.crisis_scenario == scenario),
                "missing scenario {scenario}"
            );
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = CrisisDatasetGenerator::new(9).generate(20);
        let b = CrisisDatasetGenerator::new(9).generate(20);
        assert_eq!(a[5].monthly_income, b[5].monthly_income);
        assert_eq!(a[19].crisis_scenario, b[19].crisis_scenario);
    }
}
