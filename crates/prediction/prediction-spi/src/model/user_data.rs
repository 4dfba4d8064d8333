//! Loosely-typed user data accepted by the prediction endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PredictionError, Result};

/// Free-form user financial data.
///
/// Unknown keys are ignored; missing keys fall back to per-model defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserData(Map<String, Value>);

impl UserData {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Numeric field, if present and representable.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Numeric field with a default for missing keys.
    pub fn number_or(&self, key: &str, default: f64) -> f64 {
        self.number(key).unwrap_or(default)
    }

    /// Numeric field validated to be finite and at least `min`.
    ///
    /// Missing keys return the default; present-but-invalid values are an
    /// input error.
    pub fn bounded_number(&self, key: &str, default: f64, min: f64) -> Result<f64> {
        let value = match self.0.get(key) {
            None => return Ok(default),
            Some(v) => v
                .as_f64()
                .ok_or_else(|| PredictionError::invalid(key, "must be a number"))?,
        };
        if !value.is_finite() {
            return Err(PredictionError::invalid(key, "must be a finite number"));
        }
        if value < min {
            return Err(PredictionError::invalid(
                key,
                format!("must be >= {min}"),
            ));
        }
        Ok(value)
    }

    /// String field with a default for missing keys.
    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }
}

impl From<Map<String, Value>> for UserData {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data() -> UserData {
        let Value::Object(map) = json!({
            "emergency_months": 4,
            "debt_ratio": 0.3,
            "industry": "IT",
            "bad": "not-a-number"
        }) else {
            unreachable!()
        };
        UserData::new(map)
    }

    #[test]
    fn test_number_access() {
        let d = data();
        assert_eq!(d.number_or("emergency_months", 0.0), 4.0);
        assert_eq!(d.number_or("missing", 7.5), 7.5);
    }

    #[test]
    fn test_bounded_number_defaults_and_errors() {
        let d = data();
        assert_eq!(d.bounded_number("missing", 1.0, 0.0).unwrap(), 1.0);
        assert_eq!(d.bounded_number("debt_ratio", 0.0, 0.0).unwrap(), 0.3);
        assert!(d.bounded_number("bad", 0.0, 0.0).is_err());
        assert!(d.bounded_number("debt_ratio", 0.0, 1.0).is_err());
    }

    #[test]
    fn test_string_access() {
        let d = data();
        assert_eq!(d.string_or("industry", "unknown"), "IT");
        assert_eq!(d.string_or("missing", "unknown"), "unknown");
    }
}
