//! What-if Monte Carlo simulation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use prediction_api::WhatIfConfig;
use prediction_spi::{
    PredictionError, Result, RiskTolerance, WhatIfOutcome, WhatIfRequest, YearBand,
};

/// Mean annual return and volatility implied by risk tolerance.
fn return_assumptions(tolerance: RiskTolerance) -> (f64, f64) {
    match tolerance {
        RiskTolerance::Low => (0.05, 0.04),
        RiskTolerance::Medium => (0.07, 0.10),
        RiskTolerance::High => (0.09, 0.16),
    }
}

/// Run the what-if Monte Carlo simulation.
///
/// Each run draws its own RNG stream from the configured seed, so results
/// are reproducible for a given request.
pub fn simulate_what_if(request: &WhatIfRequest, config: &WhatIfConfig) -> Result<WhatIfOutcome> {
    request.validate()?;

    let years = request.simulation_years as usize;
    let runs = request.num_simulations as usize;
    let (mean_return, volatility) = match request.scenarios.investment_return {
        Some(ir) => (ir.annual_return, return_assumptions(request.risk_tolerance).1),
        None => return_assumptions(request.risk_tolerance),
    };
    let returns = Normal::new(mean_return, volatility)
        .map_err(|e| PredictionError::SimulationError(e.to_string()))?;

    let mut year_values: Vec<Vec<f64>> = vec![Vec::with_capacity(runs); years];
    let mut terminal = Vec::with_capacity(runs);
    let mut insolvent_runs = 0usize;

    for run in 0..runs {
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(run as u64));
        let mut income = request.current_income;
        let mut expenses = request.current_expenses;
        let mut net_worth = request.current_savings - request.current_debt;
        let mut insolvent = false;

        for bucket in year_values.iter_mut() {
            let mut unemployed_months = 0u32;
            if let Some(job_loss) = request.scenarios.job_loss {
                if rng.gen::<f64>() < job_loss.probability {
                    unemployed_months = job_loss.duration_months.min(12);
                }
            }
            if let Some(raise) = request.scenarios.raise {
                if rng.gen::<f64>() < raise.probability {
                    income *= 1.0 + raise.percentage;
                }
            }
            if let Some(increase) = request.scenarios.expense_increase {
                if rng.gen::<f64>() < increase.probability {
                    expenses *= 1.0 + increase.percentage;
                }
            }

            let annual_income = income * f64::from(12 - unemployed_months);
            let annual_expenses = expenses * 12.0;

            if net_worth > 0.0 {
                net_worth *= 1.0 + returns.sample(&mut rng);
            }
            net_worth += annual_income - annual_expenses;

            if net_worth < 0.0 {
                insolvent = true;
            }
            bucket.push(net_worth);
        }

        if insolvent {
            insolvent_runs += 1;
        }
        terminal.push(net_worth);
    }

    let projection = year_values
        .iter()
        .enumerate()
        .map(|(i, values)| {
            let mut sorted = values.clone();
            sorted.sort_by(f64::total_cmp);
            YearBand {
                year: (i + 1) as u32,
                p10: percentile(&sorted, 0.10),
                p50: percentile(&sorted, 0.50),
                p90: percentile(&sorted, 0.90),
            }
        })
        .collect();

    let mut sorted_terminal = terminal.clone();
    sorted_terminal.sort_by(f64::total_cmp);
    let survival_probability = 1.0 - insolvent_runs as f64 / runs as f64;
    let average = terminal.iter().sum::<f64>() / runs as f64;

    Ok(WhatIfOutcome {
        net_worth_projection: projection,
        survival_probability,
        average_net_worth: average,
        median_net_worth: percentile(&sorted_terminal, 0.50),
        worst_case_net_worth: sorted_terminal[0],
        best_case_net_worth: sorted_terminal[sorted_terminal.len() - 1],
        recommendations: recommendations(survival_probability, average, request),
    })
}

/// Linear-interpolation percentile of pre-sorted values.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}

fn recommendations(
    survival_probability: f64,
    average_net_worth: f64,
    request: &WhatIfRequest,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if survival_probability < 0.7 {
        recommendations
            .push("High insolvency risk: build emergency savings before investing".to_string());
        recommendations.push("Reduce fixed expenses to improve cash-flow margin".to_string());
    } else if survival_probability < 0.9 {
        recommendations.push("Increase emergency fund to absorb income shocks".to_string());
    }
    if request.scenarios.job_loss.is_some() && survival_probability < 0.95 {
        recommendations.push("Consider income protection insurance".to_string());
    }
    if average_net_worth < request.current_savings {
        recommendations
            .push("Projected net worth shrinks: revisit spending and return assumptions".to_string());
    }
    if recommendations.is_empty() {
        recommendations.push("Maintain current savings discipline".to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use prediction_spi::{JobLossScenario, WhatIfScenarios};

    fn request() -> WhatIfRequest {
        WhatIfRequest {
            current_income: 5_000.0,
            current_expenses: 3_000.0,
            current_savings: 50_000.0,
            current_debt: 10_000.0,
            age: 35,
            risk_tolerance: RiskTolerance::Medium,
            scenarios: WhatIfScenarios::default(),
            simulation_years: 10,
            num_simulations: 500,
        }
    }

    #[test]
    fn test_saver_profile_rarely_goes_insolvent() {
        let outcome = simulate_what_if(&request(), &WhatIfConfig::default()).unwrap();
        assert!(outcome.survival_probability > 0.95);
        assert_eq!(outcome.net_worth_projection.len(), 10);
        assert!(outcome.best_case_net_worth >= outcome.median_net_worth);
        assert!(outcome.worst_case_net_worth <= outcome.median_net_worth);
    }

    #[test]
    fn test_projection_bands_are_ordered() {
        let outcome = simulate_what_if(&request(), &WhatIfConfig::default()).unwrap();
        for band in &outcome.net_worth_projection {
            assert!(band.p10 <= band.p50);
            assert!(band.p50 <= band.p90);
        }
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let a = simulate_what_if(&request(), &WhatIfConfig::default()).unwrap();
        let b = simulate_what_if(&request(), &WhatIfConfig::default()).unwrap();
        assert_eq!(a.median_net_worth, b.median_net_worth);
        assert_eq!(a.survival_probability, b.survival_probability);
    }

    #[test]
    fn test_job_loss_scenario_lowers_survival() {
        let base = simulate_what_if(&request(), &WhatIfConfig::default()).unwrap();

        let mut risky = request();
        risky.current_savings = 5_000.0;
        risky.current_expenses = 4_800.0;
        risky.scenarios = WhatIfScenarios {
            job_loss: Some(JobLossScenario {
                probability: 0.3,
                duration_months: 6,
            }),
            ..Default::default()
        };
        let stressed = simulate_what_if(&risky, &WhatIfConfig::default()).unwrap();
        assert!(stressed.survival_probability < base.survival_probability);
        assert!(!stressed.recommendations.is_empty());
    }

    #[test]
    fn test_median_between_worst_and_best() {
        let outcome = simulate_what_if(&request(), &WhatIfConfig::default()).unwrap();
        assert!(outcome.median_net_worth >= outcome.worst_case_net_worth);
        assert!(outcome.median_net_worth <= outcome.best_case_net_worth);
    }

    #[test]
    fn test_invalid_request_rejected() {
        let mut r = request();
        r.num_simulations = 10;
        assert!(simulate_what_if(&r, &WhatIfConfig::default()).is_err());
    }
}
