//! API route handlers.

pub mod analytics;
pub mod insights;
pub mod security;

use chrono::{SecondsFormat, Utc};

/// Current timestamp in ISO-8601 with a trailing Z.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Round to `digits` decimal places for response payloads.
pub fn round(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
