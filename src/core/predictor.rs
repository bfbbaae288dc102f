use crate::core::artifacts::ModelArtifacts;
use crate::core::encoder::LabelEncoder;
use crate::core::scaler::StandardScaler;
use crate::domain::model::{FeatureVector, Forecast, TrafficForm};
use crate::domain::ports::Regressor;
use crate::utils::error::Result;
use crate::utils::validation::{parse_form_number, require_form_fields};

/// Predicted volume above this is reported as heavy traffic.
pub const CONGESTION_THRESHOLD: f64 = 4000.0;

/// Substituted when the submitted holiday label was never seen during fitting.
pub const HOLIDAY_FALLBACK: &str = "none";
/// Substituted when the submitted weather label was never seen during fitting.
pub const WEATHER_FALLBACK: &str = "clear";

/// Wraps the pre-fitted artifacts and runs the per-request pipeline:
/// validate, encode, scale, predict, compare against the threshold.
pub struct PredictionService {
    model: Box<dyn Regressor>,
    holiday_encoder: LabelEncoder,
    weather_encoder: LabelEncoder,
    scaler: StandardScaler,
}

impl PredictionService {
    pub fn new(artifacts: ModelArtifacts) -> Self {
        Self {
            model: Box::new(artifacts.model),
            holiday_encoder: artifacts.holiday_encoder,
            weather_encoder: artifacts.weather_encoder,
            scaler: artifacts.scaler,
        }
    }

    pub fn forecast(&self, form: &TrafficForm) -> Result<Forecast> {
        let features = self.build_features(form)?;
        let scaled = self.scaler.transform(&features.as_array())?;
        let predicted = self.model.predict(&scaled)?;
        let rounded = predicted.round();
        let volume = rounded as i64;

        tracing::debug!("Predicted traffic volume: {}", volume);

        Ok(Forecast {
            volume,
            congested: rounded > CONGESTION_THRESHOLD,
        })
    }

    fn build_features(&self, form: &TrafficForm) -> Result<FeatureVector> {
        let holiday = form.holiday.trim().to_lowercase();
        let weather = form.weather.trim().to_lowercase();

        require_form_fields(&[
            ("holiday", &holiday),
            ("weather", &weather),
            ("temp", &form.temp),
            ("rain", &form.rain),
            ("snow", &form.snow),
            ("year", &form.year),
            ("month", &form.month),
            ("day", &form.day),
            ("hour", &form.hour),
            ("minutes", &form.minutes),
            ("seconds", &form.seconds),
        ])?;

        let temp: f64 = parse_form_number("temp", &form.temp)?;
        let rain: f64 = parse_form_number("rain", &form.rain)?;
        let snow: f64 = parse_form_number("snow", &form.snow)?;
        let year: i32 = parse_form_number("year", &form.year)?;
        let month: i32 = parse_form_number("month", &form.month)?;
        let day: i32 = parse_form_number("day", &form.day)?;
        let hour: i32 = parse_form_number("hour", &form.hour)?;
        let minutes: i32 = parse_form_number("minutes", &form.minutes)?;
        let seconds: i32 = parse_form_number("seconds", &form.seconds)?;

        // Labels the encoders never saw are substituted, not rejected.
        let holiday = if self.holiday_encoder.contains(&holiday) {
            holiday
        } else {
            tracing::debug!("Unknown holiday '{}', using '{}'", holiday, HOLIDAY_FALLBACK);
            HOLIDAY_FALLBACK.to_string()
        };
        let weather = if self.weather_encoder.contains(&weather) {
            weather
        } else {
            tracing::debug!("Unknown weather '{}', using '{}'", weather, WEATHER_FALLBACK);
            WEATHER_FALLBACK.to_string()
        };

        Ok(FeatureVector {
            holiday_encoded: self.holiday_encoder.transform(&holiday)?,
            temp,
            rain,
            snow,
            weather_encoded: self.weather_encoder.transform(&weather)?,
            year: year as f64,
            month: month as f64,
            day: day as f64,
            hour: hour as f64,
            minutes: minutes as f64,
            seconds: seconds as f64,
        })
    }
}
