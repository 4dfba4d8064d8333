pub mod prediction_error;

pub use prediction_error::{PredictionError, Result};
