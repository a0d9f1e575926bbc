use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::features::info::dtos::InfoResponseDto;
use crate::features::predict::PredictionService;

const ENDPOINTS: &[(&str, &str)] = &[
    ("/predict", "POST feature values, returns stress level and recommendation"),
    ("/chat", "POST {message}, returns the assistant's completion"),
    ("/suggest", "POST {activity, budget, lat?, lng?, town?}, returns a structured plan"),
];

/// Service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Available endpoints", body = InfoResponseDto),
    ),
    tag = "info"
)]
pub async fn info(State(predictions): State<Arc<PredictionService>>) -> Json<InfoResponseDto> {
    let endpoints: BTreeMap<String, String> = ENDPOINTS
        .iter()
        .map(|(path, description)| (path.to_string(), description.to_string()))
        .collect();

    Json(InfoResponseDto {
        message: "Stress relief API is running".to_string(),
        endpoints,
        model_loaded: predictions.is_ready(),
    })
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up"),
    ),
    tag = "info"
)]
pub async fn health() -> StatusCode {
    StatusCode::OK
}
