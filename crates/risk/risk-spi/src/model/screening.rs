//! Rule-based financial screening types.

use serde::{Deserialize, Serialize};

/// Severity of a screening finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Financial profile submitted for rule-based screening.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreeningProfile {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    /// Months of expenses the emergency fund covers.
    pub emergency_fund_months: f64,
    pub debt_to_income_ratio: f64,
    /// Fraction of income saved, 0-1.
    pub savings_rate: f64,
    /// Composite stress indicator, 0-1.
    pub financial_stress_score: f64,
}

/// One rule violation found during screening.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningFinding {
    /// Stable identifier, e.g. `low_emergency_fund`.
    pub kind: String,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

/// Qualitative health indicators reported alongside findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthIndicators {
    pub emergency_fund_status: String,
    pub debt_level: String,
    pub savings_habit: String,
    pub stress_level: String,
}

/// Full screening report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub anomaly_score: f64,
    pub overall_risk: Severity,
    pub findings: Vec<ScreeningFinding>,
    pub total_findings: usize,
    pub indicators: HealthIndicators,
    pub priority_actions: Vec<String>,
}
