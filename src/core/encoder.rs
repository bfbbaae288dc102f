use crate::utils::error::{Result, TrafficError};
use serde::{Deserialize, Serialize};

/// Fitted label encoder: maps a categorical label to its index in the
/// ordered class list the encoder was fitted with. The class order comes
/// from the artifact and must not be re-sorted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.classes.iter().any(|c| c == label)
    }

    pub fn transform(&self, label: &str) -> Result<f64> {
        self.classes
            .iter()
            .position(|c| c == label)
            .map(|idx| idx as f64)
            .ok_or_else(|| TrafficError::PredictionError {
                message: format!("Label '{}' not among fitted classes", label),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> LabelEncoder {
        LabelEncoder::new(vec![
            "clear".to_string(),
            "clouds".to_string(),
            "rain".to_string(),
        ])
    }

    #[test]
    fn test_transform_known_labels() {
        let enc = encoder();
        assert_eq!(enc.transform("clear").unwrap(), 0.0);
        assert_eq!(enc.transform("rain").unwrap(), 2.0);
    }

    #[test]
    fn test_unknown_label_is_error() {
        let enc = encoder();
        assert!(!enc.contains("sandstorm"));
        assert!(enc.transform("sandstorm").is_err());
    }
}
