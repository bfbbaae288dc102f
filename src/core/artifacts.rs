use crate::core::encoder::LabelEncoder;
use crate::core::model::LinearRegressor;
use crate::core::scaler::StandardScaler;
use crate::domain::model::FEATURE_COUNT;
use crate::utils::error::{Result, TrafficError};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// The four pre-fitted artifacts the service wraps. Loaded once at startup
/// and treated as read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub model: LinearRegressor,
    pub holiday_encoder: LabelEncoder,
    pub weather_encoder: LabelEncoder,
    pub scaler: StandardScaler,
}

impl ModelArtifacts {
    pub fn load(dir: &Path) -> Result<Self> {
        tracing::info!("Loading model artifacts from {}", dir.display());

        let artifacts = Self {
            model: load_json(dir, "model.json")?,
            holiday_encoder: load_json(dir, "holiday_encoder.json")?,
            weather_encoder: load_json(dir, "weather_encoder.json")?,
            scaler: load_json(dir, "scaler.json")?,
        };
        artifacts.check_shapes()?;

        tracing::debug!(
            "Artifacts loaded: {} holiday classes, {} weather classes, {} features",
            artifacts.holiday_encoder.classes.len(),
            artifacts.weather_encoder.classes.len(),
            artifacts.model.coefficients.len()
        );

        Ok(artifacts)
    }

    // The artifacts are produced elsewhere; a shape mismatch means the
    // directory holds files from different training runs.
    fn check_shapes(&self) -> Result<()> {
        if self.model.coefficients.len() != FEATURE_COUNT {
            return Err(TrafficError::artifact(format!(
                "model.json has {} coefficients, expected {}",
                self.model.coefficients.len(),
                FEATURE_COUNT
            )));
        }
        if self.scaler.mean.len() != FEATURE_COUNT || self.scaler.scale.len() != FEATURE_COUNT {
            return Err(TrafficError::artifact(format!(
                "scaler.json has {}/{} parameters, expected {}",
                self.scaler.mean.len(),
                self.scaler.scale.len(),
                FEATURE_COUNT
            )));
        }
        if self.holiday_encoder.classes.is_empty() || self.weather_encoder.classes.is_empty() {
            return Err(TrafficError::artifact(
                "encoder artifact has no fitted classes",
            ));
        }
        Ok(())
    }
}

fn load_json<T: DeserializeOwned>(dir: &Path, filename: &str) -> Result<T> {
    let path = dir.join(filename);
    let data = fs::read(&path).map_err(|e| {
        TrafficError::artifact(format!("Cannot read {}: {}", path.display(), e))
    })?;
    let value = serde_json::from_slice(&data).map_err(|e| {
        TrafficError::artifact(format!("Cannot parse {}: {}", path.display(), e))
    })?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_check_rejects_wrong_coefficient_count() {
        let artifacts = ModelArtifacts {
            model: LinearRegressor {
                intercept: 0.0,
                coefficients: vec![1.0; 3],
            },
            holiday_encoder: LabelEncoder::new(vec!["none".to_string()]),
            weather_encoder: LabelEncoder::new(vec!["clear".to_string()]),
            scaler: StandardScaler {
                mean: vec![0.0; FEATURE_COUNT],
                scale: vec![1.0; FEATURE_COUNT],
            },
        };
        assert!(artifacts.check_shapes().is_err());
    }

    #[test]
    fn test_load_missing_directory_is_artifact_error() {
        let err = ModelArtifacts::load(Path::new("/nonexistent/artifacts")).unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::TrafficError::ArtifactError { .. }
        ));
    }
}
