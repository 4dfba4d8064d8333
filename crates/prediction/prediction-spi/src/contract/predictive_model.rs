//! Predictive model trait definition.

use crate::error::Result;
use crate::model::{Prediction, PredictionKind, TimeHorizon, UserData};

/// Predictive model trait.
///
/// Implementations answer one kind of prediction from loosely-typed user
/// data; unknown keys are ignored and missing keys take documented defaults.
pub trait PredictiveModel: Send + Sync {
    /// The prediction kind this model answers.
    fn kind(&self) -> PredictionKind;

    /// Run the prediction for a time horizon.
    fn predict(&self, data: &UserData, horizon: TimeHorizon) -> Result<Prediction>;
}
