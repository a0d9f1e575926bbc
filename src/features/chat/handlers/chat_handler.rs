use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::extractor::{AppJson, AppJsonRejection};
use crate::features::chat::dtos::ChatRequestDto;
use crate::features::chat::services::ChatService;
use crate::shared::types::ErrorMessage;

/// Chat with the supportive assistant
///
/// Returns the provider's chat-completion JSON unmodified. Any failure is
/// returned as `{"error": "..."}` with status 200.
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Raw provider completion JSON, or an error message"),
    ),
    tag = "chat"
)]
pub async fn chat(
    State(service): State<Arc<ChatService>>,
    body: Result<AppJson<ChatRequestDto>, AppJsonRejection>,
) -> Response {
    let outcome = match body {
        Ok(AppJson(dto)) => service.chat(&dto.message).await.map_err(|e| e.to_string()),
        Err(rejection) => Err(rejection.message()),
    };

    match outcome {
        Ok(completion) => Json(completion).into_response(),
        Err(message) => {
            tracing::warn!("Chat failed: {}", message);
            Json(ErrorMessage::new(message)).into_response()
        }
    }
}
