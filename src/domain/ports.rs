use crate::utils::error::Result;

/// Seam for the regression model so the prediction service does not care
/// which model family the artifact was fitted with.
pub trait Regressor: Send + Sync {
    /// Predict a single scalar from an already-scaled feature vector.
    fn predict(&self, features: &[f64]) -> Result<f64>;
}
