pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::config::ServerConfig;
pub use crate::core::artifacts::ModelArtifacts;
pub use crate::core::predictor::PredictionService;
pub use crate::domain::model::{FeatureVector, Forecast, TrafficForm};
pub use crate::server::build_router;
pub use crate::utils::error::{Result, TrafficError};
