use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::predict::handlers;
use crate::features::predict::services::PredictionService;

/// Create routes for the predict feature
pub fn routes(service: Arc<PredictionService>) -> Router {
    Router::new()
        .route("/predict", post(handlers::predict))
        .with_state(service)
}
