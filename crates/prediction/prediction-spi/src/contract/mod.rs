pub mod predictive_model;

pub use predictive_model::PredictiveModel;
