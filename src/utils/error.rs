use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrafficError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Artifact error: {message}")]
    ArtifactError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Prediction error: {message}")]
    PredictionError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TrafficError {
    pub fn validation(message: impl Into<String>) -> Self {
        TrafficError::ValidationError {
            message: message.into(),
        }
    }

    pub fn artifact(message: impl Into<String>) -> Self {
        TrafficError::ArtifactError {
            message: message.into(),
        }
    }

    /// Message safe to show on a rendered page.
    pub fn user_friendly_message(&self) -> String {
        match self {
            TrafficError::ValidationError { message } => message.clone(),
            _ => "Something went wrong.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrafficError>;
