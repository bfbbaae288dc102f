use crate::utils::error::{Result, TrafficError};
use std::str::FromStr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrafficError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TrafficError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TrafficError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Form-field presence check: every submitted field must be non-empty after trimming.
pub fn require_form_fields(fields: &[(&str, &str)]) -> Result<()> {
    if fields.iter().any(|(_, value)| value.trim().is_empty()) {
        return Err(TrafficError::validation("Please fill all fields."));
    }
    Ok(())
}

/// Parse a numeric form field, reporting the offending field on failure.
pub fn parse_form_number<T: FromStr>(field_name: &str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        TrafficError::validation(format!("'{}' must be a valid number.", field_name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("host", "0.0.0.0").is_ok());
        assert!(validate_non_empty_string("host", "").is_err());
        assert!(validate_non_empty_string("host", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("artifacts", "./artifacts").is_ok());
        assert!(validate_path("artifacts", "").is_err());
        assert!(validate_path("artifacts", "bad\0path").is_err());
    }

    #[test]
    fn test_require_form_fields() {
        assert!(require_form_fields(&[("holiday", "none"), ("temp", "288.3")]).is_ok());

        let err = require_form_fields(&[("holiday", "none"), ("temp", "  ")]).unwrap_err();
        assert_eq!(err.user_friendly_message(), "Please fill all fields.");
    }

    #[test]
    fn test_parse_form_number() {
        assert_eq!(parse_form_number::<f64>("temp", " 288.3 ").unwrap(), 288.3);
        assert_eq!(parse_form_number::<i32>("year", "2024").unwrap(), 2024);
        assert!(parse_form_number::<f64>("temp", "warm").is_err());
        assert!(parse_form_number::<i32>("year", "20.5").is_err());
    }
}
