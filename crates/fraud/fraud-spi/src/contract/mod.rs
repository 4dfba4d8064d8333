pub mod estimator;

pub use estimator::{Classifier, FeatureScaler, OutlierDetector};
