//! Crisis scenario simulation.

use prediction_spi::{
    CrisisOutlook, CrisisProfile, CrisisScenario, MonthlyProjection, Result, RiskRating,
    ScenarioAnalysis,
};

/// Income loss fraction, crisis duration in months and recovery factor per
/// scenario, at full severity.
fn scenario_impact(scenario: CrisisScenario) -> (f64, u32, f64) {
    match scenario {
        CrisisScenario::JobLoss => (1.0, 6, 0.7),
        CrisisScenario::MedicalEmergency => (0.3, 3, 0.9),
        CrisisScenario::MarketCrash => (0.4, 12, 0.6),
        CrisisScenario::InflationSpike => (0.1, 24, 0.5),
        CrisisScenario::DebtCrisis => (0.2, 18, 0.4),
        CrisisScenario::BusinessFailure => (0.8, 24, 0.3),
    }
}

/// Simulate a crisis scenario month by month for up to two years.
///
/// Income decays exponentially through the crisis window and climbs back
/// linearly over the following year; the projection stops early once the
/// cumulative buffer runs out.
pub fn simulate_crisis(profile: &CrisisProfile) -> Result<CrisisOutlook> {
    profile.validate()?;

    let (base_loss, duration, _recovery_factor) = scenario_impact(profile.crisis_scenario);
    let income_loss = base_loss * profile.crisis_severity;
    let expense_increase = match profile.crisis_scenario {
        CrisisScenario::MedicalEmergency => 0.2 * profile.crisis_severity,
        _ => 0.1 * profile.crisis_severity,
    };

    let mut projections = Vec::new();
    let mut cumulative = profile.emergency_fund_months * profile.monthly_expenses;

    for month in 1..=24u32 {
        let (income, expenses) = if month <= duration {
            (
                profile.monthly_income * (1.0 - income_loss * (-(month as f64) / 6.0).exp()),
                profile.monthly_expenses * (1.0 + expense_increase),
            )
        } else {
            let recovery_progress = (month - duration) as f64 / 12.0;
            let residual_loss =
                income_loss * (-(duration as f64) / 6.0).exp() * (1.0 - recovery_progress);
            (
                profile.monthly_income * (1.0 - residual_loss),
                profile.monthly_expenses,
            )
        };

        let savings = income - expenses;
        cumulative += savings;
        projections.push(MonthlyProjection {
            month,
            income,
            expenses,
            savings,
            cumulative_savings: cumulative,
        });

        if cumulative <= 0.0 {
            break;
        }
    }

    let survival_months = projections
        .iter()
        .position(|p| p.cumulative_savings <= 0.0)
        .unwrap_or(projections.len()) as u32;
    let worst = projections
        .iter()
        .min_by(|a, b| a.savings.total_cmp(&b.savings))
        .expect("projection always has at least one month");
    let worst_month = worst.month;
    let worst_month_savings = worst.savings;

    let recovery_time = duration as f64
        * (2.0 - profile.job_stability)
        * (2.0 - profile.skills_relevance);

    let debt_to_income = profile.total_debt / (profile.monthly_income * 12.0);
    let financial_stress =
        (profile.monthly_expenses / profile.monthly_income + debt_to_income * 0.1) / 2.0;

    let risk_level = if survival_months < 3 || financial_stress > 0.8 {
        RiskRating::Critical
    } else if survival_months < 6 || financial_stress > 0.6 {
        RiskRating::High
    } else if survival_months < 9 || financial_stress > 0.4 {
        RiskRating::Medium
    } else {
        RiskRating::Low
    };

    let recommendations = recommendations(risk_level, survival_months, debt_to_income);

    projections.truncate(12);
    Ok(CrisisOutlook {
        survival_months,
        worst_month,
        worst_month_savings,
        recovery_time_months: recovery_time.round() as u32,
        risk_level,
        financial_stress_score: financial_stress,
        monthly_projections: projections,
        recommendations,
        scenario_analysis: ScenarioAnalysis {
            income_loss_percentage: (income_loss * 1000.0).round() / 10.0,
            expense_increase_percentage: (expense_increase * 1000.0).round() / 10.0,
            crisis_duration_months: duration,
        },
    })
}

fn recommendations(risk: RiskRating, survival_months: u32, debt_to_income: f64) -> Vec<String> {
    let mut recommendations = Vec::new();

    if survival_months < 3 {
        recommendations
            .push("URGENT: Build emergency fund to cover 6+ months of expenses".to_string());
        recommendations.push("Consider income protection insurance".to_string());
    }
    if debt_to_income > 0.4 {
        recommendations.push("Create aggressive debt reduction plan".to_string());
        recommendations.push("Consider debt consolidation options".to_string());
    }
    if matches!(risk, RiskRating::Critical | RiskRating::High) {
        recommendations.push("Diversify income sources".to_string());
        recommendations.push("Update skills to improve employability".to_string());
        recommendations.push("Review and cut non-essential expenses".to_string());
    }
    if risk == RiskRating::Medium {
        recommendations.push("Increase emergency fund contributions".to_string());
        recommendations.push("Review investment portfolio for risk management".to_string());
    }

    recommendations
}
