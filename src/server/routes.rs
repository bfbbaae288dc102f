//! Route handlers for the form and prediction pages.

use crate::core::predictor::PredictionService;
use crate::domain::model::TrafficForm;
use crate::server::pages;
use crate::utils::error::TrafficError;
use axum::extract::{Form, State};
use axum::response::Html;
use axum::Json;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
}

pub async fn index() -> Html<String> {
    Html(pages::render_index(None))
}

pub async fn predict(
    State(state): State<AppState>,
    Form(form): Form<TrafficForm>,
) -> Html<String> {
    match state.service.forecast(&form) {
        Ok(forecast) if forecast.congested => {
            tracing::info!("Predicted volume {} (heavy traffic)", forecast.volume);
            Html(pages::render_congested(forecast.volume))
        }
        Ok(forecast) => {
            tracing::info!("Predicted volume {} (clear)", forecast.volume);
            Html(pages::render_clear(forecast.volume))
        }
        Err(err @ TrafficError::ValidationError { .. }) => {
            tracing::debug!("Rejected form submission: {}", err);
            Html(pages::render_index(Some(&err.user_friendly_message())))
        }
        Err(err) => {
            tracing::error!("Prediction failed: {}", err);
            Html(pages::render_index(Some("Something went wrong.")))
        }
    }
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
