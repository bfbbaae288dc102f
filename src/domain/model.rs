use serde::{Deserialize, Serialize};

/// Raw form submission. Every field arrives as a string; absent fields
/// deserialize to empty strings so validation can report them uniformly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrafficForm {
    #[serde(default)]
    pub holiday: String,
    #[serde(default)]
    pub weather: String,
    #[serde(default)]
    pub temp: String,
    #[serde(default)]
    pub rain: String,
    #[serde(default)]
    pub snow: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub hour: String,
    #[serde(default)]
    pub minutes: String,
    #[serde(default)]
    pub seconds: String,
}

/// Per-request feature vector. Field order must match what the fitted
/// scaler and model expect; `as_array` is the single place that order
/// is written down.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub holiday_encoded: f64,
    pub temp: f64,
    pub rain: f64,
    pub snow: f64,
    pub weather_encoded: f64,
    pub year: f64,
    pub month: f64,
    pub day: f64,
    pub hour: f64,
    pub minutes: f64,
    pub seconds: f64,
}

pub const FEATURE_COUNT: usize = 11;

impl FeatureVector {
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.holiday_encoded,
            self.temp,
            self.rain,
            self.snow,
            self.weather_encoded,
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minutes,
            self.seconds,
        ]
    }
}

/// Result of one prediction: the rounded traffic volume and the verdict
/// against the congestion threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forecast {
    pub volume: i64,
    pub congested: bool,
}
