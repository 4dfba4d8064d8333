pub mod fraud_error;

pub use fraud_error::{FraudError, Result};
