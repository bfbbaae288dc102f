pub mod artifacts;
pub mod encoder;
pub mod model;
pub mod predictor;
pub mod scaler;

pub use crate::domain::model::{FeatureVector, Forecast, TrafficForm};
pub use crate::domain::ports::Regressor;
pub use crate::utils::error::Result;
