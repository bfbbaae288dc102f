use crate::domain::ports::Regressor;
use crate::utils::error::{Result, TrafficError};
use serde::{Deserialize, Serialize};

/// Pre-fitted linear regression model: `intercept + coefficients . x`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl Regressor for LinearRegressor {
    fn predict(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(TrafficError::PredictionError {
                message: format!(
                    "Model fitted for {} features, got {}",
                    self.coefficients.len(),
                    features.len()
                ),
            });
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features.iter())
            .map(|(c, x)| c * x)
            .sum();

        Ok(self.intercept + dot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_is_affine() {
        let model = LinearRegressor {
            intercept: 1.5,
            coefficients: vec![2.0, -1.0],
        };
        assert_eq!(model.predict(&[3.0, 4.0]).unwrap(), 3.5);
    }

    #[test]
    fn test_length_mismatch_is_error() {
        let model = LinearRegressor {
            intercept: 0.0,
            coefficients: vec![1.0, 1.0],
        };
        assert!(model.predict(&[1.0, 2.0, 3.0]).is_err());
    }
}
