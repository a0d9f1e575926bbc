use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::suggest::handlers;
use crate::features::suggest::services::SuggestService;

/// Create routes for the suggest feature
pub fn routes(service: Arc<SuggestService>) -> Router {
    Router::new()
        .route("/suggest", post(handlers::suggest))
        .with_state(service)
}
