//! Income volatility analysis.

use prediction_spi::{
    CareerInsights, IncomeRange, Result, RiskRating, StabilityFactors, VolatilityProfile,
    VolatilityReport,
};

/// Base layoff risk per industry.
fn industry_risk(industry: &str) -> f64 {
    match industry.to_lowercase().as_str() {
        "technology" => 0.35,
        "healthcare" => 0.15,
        "finance" => 0.25,
        "manufacturing" => 0.30,
        "retail" => 0.40,
        "education" => 0.10,
        "government" => 0.05,
        "gig_economy" => 0.60,
        _ => 0.25,
    }
}

/// Stability factor per education level.
fn education_factor(education: &str) -> f64 {
    match education.to_lowercase().as_str() {
        "high_school" => 0.7,
        "bachelors" => 0.8,
        "masters" => 0.9,
        "phd" => 0.95,
        _ => 0.8,
    }
}

/// Growth rate, automation risk and outlook per industry.
fn industry_trend(industry: &str) -> (f64, f64, &'static str) {
    match industry.to_lowercase().as_str() {
        "technology" => (0.12, 0.4, "strong"),
        "healthcare" => (0.08, 0.3, "stable"),
        "finance" => (0.06, 0.6, "moderate"),
        "manufacturing" => (0.04, 0.8, "declining"),
        "retail" => (0.03, 0.7, "challenging"),
        "education" => (0.05, 0.2, "stable"),
        "government" => (0.02, 0.1, "very_stable"),
        "gig_economy" => (0.15, 0.5, "volatile"),
        _ => (0.05, 0.5, "moderate"),
    }
}

/// Analyse income volatility and layoff exposure for a profile.
pub fn analyze_volatility(profile: &VolatilityProfile) -> Result<VolatilityReport> {
    profile.validate()?;

    let age_factor = if profile.age < 45 { 1.0 } else { 1.2 };
    let industry = industry_risk(&profile.industry);
    let education = education_factor(&profile.education);

    let volatility_score = ((1.0 - profile.job_stability_score) * 0.3
        + profile.automation_risk_score * 0.25
        + industry * 0.2
        + (1.0 - profile.skill_relevance_score) * 0.15
        + (1.0 - education) * 0.1)
        * age_factor;

    let risk_level = if volatility_score > 0.4 {
        RiskRating::High
    } else if volatility_score > 0.25 {
        RiskRating::Medium
    } else {
        RiskRating::Low
    };

    let layoff_risk = (1.0 - profile.job_stability_score)
        * industry
        * (1.0 - profile.skill_relevance_score);

    let (growth, industry_automation, outlook) = industry_trend(&profile.industry);

    Ok(VolatilityReport {
        volatility_score,
        risk_level,
        predicted_income_range: IncomeRange {
            monthly_low: profile.base_salary * (1.0 - volatility_score * 0.5),
            monthly_high: profile.base_salary * (1.0 + volatility_score * 0.3),
            confidence: 0.95,
        },
        layoff_risk_score: layoff_risk,
        stability_factors: StabilityFactors {
            job_stability: profile.job_stability_score,
            automation_risk: profile.automation_risk_score,
            industry_risk: industry,
            skill_relevance: profile.skill_relevance_score,
            education_stability: education,
        },
        recommendations: recommendations(risk_level, layoff_risk, volatility_score),
        career_insights: CareerInsights {
            industry_growth_rate: growth,
            industry_automation_risk: industry_automation,
            future_outlook: outlook.to_string(),
            skill_alignment: grade(profile.skill_relevance_score, 0.8, 0.6),
            automation_vulnerability: grade(profile.automation_risk_score, 0.6, 0.3),
        },
    })
}

fn grade(value: f64, high: f64, medium: f64) -> String {
    if value > high {
        "high"
    } else if value > medium {
        "medium"
    } else {
        "low"
    }
    .to_string()
}

fn recommendations(risk: RiskRating, layoff_risk: f64, volatility_score: f64) -> Vec<String> {
    let mut recommendations = Vec::new();

    if risk == RiskRating::High {
        recommendations.push("Build larger emergency fund (9-12 months)".to_string());
        recommendations.push("Develop additional income streams".to_string());
        recommendations.push("Update skills for better job security".to_string());
    }
    if layoff_risk > 0.3 {
        recommendations.push("Start networking and job market research".to_string());
        recommendations.push("Consider freelance or part-time work".to_string());
    }
    if volatility_score > 0.3 {
        recommendations.push("Create strict budget and expense tracking".to_string());
        recommendations
            .push("Avoid large financial commitments during high volatility".to_string());
    }

    recommendations
}
