use crate::utils::error::{Result, TrafficError};
use serde::{Deserialize, Serialize};

/// Fitted standard scaler: per-feature `(x - mean) / scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.mean.len() || self.mean.len() != self.scale.len() {
            return Err(TrafficError::PredictionError {
                message: format!(
                    "Scaler fitted for {} features, got {}",
                    self.mean.len(),
                    features.len()
                ),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_centers_and_scales() {
        let scaler = StandardScaler {
            mean: vec![10.0, 0.0],
            scale: vec![2.0, 1.0],
        };
        let scaled = scaler.transform(&[14.0, 3.0]).unwrap();
        assert_eq!(scaled, vec![2.0, 3.0]);
    }

    #[test]
    fn test_length_mismatch_is_error() {
        let scaler = StandardScaler {
            mean: vec![0.0, 0.0],
            scale: vec![1.0, 1.0],
        };
        assert!(scaler.transform(&[1.0]).is_err());
    }
}
