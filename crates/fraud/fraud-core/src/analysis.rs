//! Risk-factor analysis derived from the transaction itself.

use fraud_spi::{RiskBand, RiskFactors, Transaction};

/// Boolean indicators comparing a transaction against account norms.
pub fn risk_factors(tx: &Transaction, typical_amount: f64) -> RiskFactors {
    RiskFactors {
        high_amount: typical_amount > 0.0 && tx.amount > typical_amount * 2.0,
        unusual_location: tx.geographic_distance > 1000.0,
        rapid_transaction: tx.time_since_last_tx < 1.0,
        device_mismatch: tx.device_mismatch == 1,
        high_velocity: tx.velocity_check > 10.0,
        new_account: tx.account_age_days < 30.0,
    }
}

/// Operational follow-ups for a given band and factor set.
pub fn fraud_recommendations(band: RiskBand, factors: &RiskFactors) -> Vec<String> {
    let mut recommendations = Vec::new();

    if matches!(band, RiskBand::Critical | RiskBand::High) {
        recommendations.push("Block transaction and require additional verification".to_string());
        recommendations.push("Contact customer immediately for verification".to_string());
    }
    if factors.high_amount {
        recommendations
            .push("Implement additional verification for high-value transactions".to_string());
    }
    if factors.unusual_location {
        recommendations.push("Verify customer location and travel plans".to_string());
    }
    if factors.device_mismatch {
        recommendations.push("Require device re-authentication".to_string());
    }
    if band == RiskBand::Medium {
        recommendations.push("Monitor for additional suspicious activity".to_string());
    }

    recommendations
}
