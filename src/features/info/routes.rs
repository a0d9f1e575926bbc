use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::info::handlers;
use crate::features::predict::PredictionService;

/// Create routes for the info feature
pub fn routes(predictions: Arc<PredictionService>) -> Router {
    Router::new()
        .route("/", get(handlers::info))
        .route("/health", get(handlers::health))
        .with_state(predictions)
}
