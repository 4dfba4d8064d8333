pub mod risk_error;

pub use risk_error::{Result, RiskError};
