use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::extractor::{AppJson, AppJsonRejection};
use crate::features::predict::dtos::{PredictRequestDto, PredictResponseDto};
use crate::features::predict::services::PredictionService;
use crate::shared::types::ErrorMessage;

/// Predict stress level from feature values
///
/// The body maps every model feature name to its value. Categorical features
/// take one of the categories seen during training, all others must be numeric.
/// Any failure is returned as `{"error": "..."}` with status 200.
#[utoipa::path(
    post,
    path = "/predict",
    request_body = PredictRequestDto,
    responses(
        (status = 200, description = "Prediction, or an error message", body = PredictResponseDto),
    ),
    tag = "predict"
)]
pub async fn predict(
    State(service): State<Arc<PredictionService>>,
    body: Result<AppJson<PredictRequestDto>, AppJsonRejection>,
) -> Response {
    let outcome = match body {
        Ok(AppJson(PredictRequestDto(input))) => service.predict(&input).map_err(|e| e.to_string()),
        Err(rejection) => Err(rejection.message()),
    };

    match outcome {
        Ok(prediction) => Json(prediction).into_response(),
        Err(message) => {
            tracing::warn!("Prediction failed: {}", message);
            Json(ErrorMessage::new(message)).into_response()
        }
    }
}
