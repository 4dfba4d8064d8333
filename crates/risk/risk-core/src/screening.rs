//! Rule-based financial screening.

use risk_api::ScreeningThresholds;
use risk_spi::{
    HealthIndicators, Result, RiskError, ScreeningFinding, ScreeningProfile, ScreeningReport,
    Severity,
};

/// Screen a financial profile against the threshold rules.
pub fn screen(profile: &ScreeningProfile, thresholds: &ScreeningThresholds) -> Result<ScreeningReport> {
    validate(profile)?;
    let mut findings = Vec::new();

    if profile.emergency_fund_months < thresholds.emergency_months_min {
        let severity = if profile.emergency_fund_months < thresholds.emergency_months_critical {
            Severity::High
        } else {
            Severity::Medium
        };
        findings.push(ScreeningFinding {
            kind: "low_emergency_fund".to_string(),
            severity,
            description: format!(
                "Emergency fund covers only {:.1} months",
                profile.emergency_fund_months
            ),
            recommendation: "Build emergency fund to cover 6+ months of expenses".to_string(),
        });
    }

    if profile.debt_to_income_ratio > thresholds.debt_ratio_max {
        let severity = if profile.debt_to_income_ratio > thresholds.debt_ratio_critical {
            Severity::Critical
        } else {
            Severity::High
        };
        findings.push(ScreeningFinding {
            kind: "high_debt_ratio".to_string(),
            severity,
            description: format!(
                "Debt-to-income ratio is {:.2}",
                profile.debt_to_income_ratio
            ),
            recommendation: "Create debt reduction plan and avoid new debt".to_string(),
        });
    }

    if profile.savings_rate < thresholds.savings_rate_min {
        findings.push(ScreeningFinding {
            kind: "low_savings_rate".to_string(),
            severity: Severity::Medium,
            description: format!("Savings rate is only {:.2}%", profile.savings_rate * 100.0),
            recommendation: "Aim to save at least 20% of income".to_string(),
        });
    }

    if profile.financial_stress_score > thresholds.stress_max {
        let severity = if profile.financial_stress_score > thresholds.stress_high {
            Severity::High
        } else {
            Severity::Medium
        };
        findings.push(ScreeningFinding {
            kind: "high_financial_stress".to_string(),
            severity,
            description: format!(
                "Financial stress score is {:.2}",
                profile.financial_stress_score
            ),
            recommendation: "Review expenses and consider financial counseling".to_string(),
        });
    }

    let anomaly_score =
        findings.len() as f64 * 0.2 + profile.financial_stress_score * 0.3;
    let overall_risk = overall_risk(anomaly_score);
    let priority_actions = priority_actions(&findings, overall_risk);

    Ok(ScreeningReport {
        anomaly_score,
        overall_risk,
        total_findings: findings.len(),
        indicators: indicators(profile),
        priority_actions,
        findings,
    })
}

fn validate(profile: &ScreeningProfile) -> Result<()> {
    for (name, value) in [
        ("monthly_income", profile.monthly_income),
        ("monthly_expenses", profile.monthly_expenses),
        ("emergency_fund_months", profile.emergency_fund_months),
        ("debt_to_income_ratio", profile.debt_to_income_ratio),
        ("savings_rate", profile.savings_rate),
        ("financial_stress_score", profile.financial_stress_score),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(RiskError::invalid(
                name,
                "must be a finite, non-negative number",
            ));
        }
    }
    Ok(())
}

fn overall_risk(anomaly_score: f64) -> Severity {
    if anomaly_score > 0.8 {
        Severity::Critical
    } else if anomaly_score > 0.6 {
        Severity::High
    } else if anomaly_score > 0.3 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

fn indicators(profile: &ScreeningProfile) -> HealthIndicators {
    HealthIndicators {
        emergency_fund_status: if profile.emergency_fund_months >= 6.0 {
            "adequate"
        } else {
            "inadequate"
        }
        .to_string(),
        debt_level: if profile.debt_to_income_ratio <= 0.3 {
            "manageable"
        } else {
            "high"
        }
        .to_string(),
        savings_habit: if profile.savings_rate >= 0.2 {
            "good"
        } else {
            "needs_improvement"
        }
        .to_string(),
        stress_level: if profile.financial_stress_score <= 0.3 {
            "low"
        } else {
            "elevated"
        }
        .to_string(),
    }
}

fn priority_actions(findings: &[ScreeningFinding], overall: Severity) -> Vec<String> {
    let mut actions = Vec::new();

    if overall == Severity::Critical {
        actions.push("IMMEDIATE: Seek professional financial advice".to_string());
        actions.push("Create emergency budget and cut all non-essential expenses".to_string());
    }

    let has = |kind: &str| findings.iter().any(|f| f.kind == kind);
    if has("low_emergency_fund") {
        actions.push("PRIORITY: Build emergency fund (target: 6 months expenses)".to_string());
    }
    if has("high_debt_ratio") {
        actions.push("PRIORITY: Contact creditors for debt management options".to_string());
    }
    if has("high_financial_stress") {
        actions
            .push("PRIORITY: Consider financial counseling or debt relief programs".to_string());
    }
    if overall == Severity::Medium {
        actions.push("Review and optimize monthly budget".to_string());
        actions.push("Increase savings rate to 20%+".to_string());
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy() -> ScreeningProfile {
        ScreeningProfile {
            monthly_income: 8_000.0,
            monthly_expenses: 4_000.0,
            emergency_fund_months: 8.0,
            debt_to_income_ratio: 0.2,
            savings_rate: 0.25,
            financial_stress_score: 0.1,
        }
    }

    fn stressed() -> ScreeningProfile {
        ScreeningProfile {
            monthly_income: 3_000.0,
            monthly_expenses: 2_900.0,
            emergency_fund_months: 0.5,
            debt_to_income_ratio: 0.8,
            savings_rate: 0.02,
            financial_stress_score: 0.9,
        }
    }

    #[test]
    fn test_healthy_profile_is_clean() {
        let report = screen(&healthy(), &ScreeningThresholds::default()).unwrap();
        assert!(report.findings.is_empty());
        assert_eq!(report.overall_risk, Severity::Low);
        assert_eq!(report.indicators.emergency_fund_status, "adequate");
        assert!(report.priority_actions.is_empty());
    }

    #[test]
    fn test_stressed_profile_triggers_all_rules() {
        let report = screen(&stressed(), &ScreeningThresholds::default()).unwrap();
        assert_eq!(report.total_findings, 4);
        assert_eq!(report.overall_risk, Severity::Critical);

        let kinds: Vec<&str> = report.findings.iter().map(|f| f.kind.as_str()).collect();
        assert!(kinds.contains(&"low_emergency_fund"));
        assert!(kinds.contains(&"high_debt_ratio"));
        assert!(kinds.contains(&"low_savings_rate"));
        assert!(kinds.contains(&"high_financial_stress"));

        // 4 findings * 0.2 + 0.9 * 0.3
        assert!((report.anomaly_score - 1.07).abs() < 1e-9);
        assert!(report
            .priority_actions
            .iter()
            .any(|a| a.starts_with("IMMEDIATE")));
    }

    #[test]
    fn test_severity_escalation() {
        let mut profile = healthy();
        profile.debt_to_income_ratio = 0.6;
        let report = screen(&profile, &ScreeningThresholds::default()).unwrap();
        assert_eq!(report.findings[0].severity, Severity::High);

        profile.debt_to_income_ratio = 0.75;
        let report = screen(&profile, &ScreeningThresholds::default()).unwrap();
        assert_eq!(report.findings[0].severity, Severity::Critical);
    }

    #[test]
    fn test_negative_input_rejected() {
        let mut profile = healthy();
        profile.savings_rate = -0.1;
        assert!(screen(&profile, &ScreeningThresholds::default()).is_err());
    }
}
