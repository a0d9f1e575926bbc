use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::suggest::dtos::SuggestRequestDto;
use crate::features::suggest::models::Suggestion;
use crate::features::suggest::services::SuggestService;
use crate::shared::types::ErrorDetail;

/// Suggest stress-relief activities
///
/// Asks the language model for a structured plan covering sleep, music,
/// breathing, exercise, travel, video, reading and meals. The reply is
/// returned as the model produced it.
#[utoipa::path(
    post,
    path = "/suggest",
    request_body = SuggestRequestDto,
    responses(
        (status = 200, description = "Suggestion object", body = Suggestion),
        (status = 400, description = "Invalid request body", body = ErrorDetail),
        (status = 500, description = "Provider failure or unusable reply", body = ErrorDetail)
    ),
    tag = "suggest"
)]
pub async fn suggest(
    State(service): State<Arc<SuggestService>>,
    AppJson(dto): AppJson<SuggestRequestDto>,
) -> Result<Json<Value>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let suggestion = service.suggest(&dto).await?;
    Ok(Json(suggestion))
}

#[cfg(test)]
mod tests {
    use crate::features::suggest::{routes, SuggestService};
    use crate::modules::openrouter::ProviderError;
    use crate::shared::test_helpers::StubProvider;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;

    fn server(provider: Arc<StubProvider>) -> TestServer {
        let service = SuggestService::new(provider, "vendor/suggest-model", Duration::from_secs(60));
        TestServer::new(routes::routes(Arc::new(service))).unwrap()
    }

    fn trip_reply() -> String {
        json!({
            "activity": "city trip",
            "summary": "Enjoy it.",
            "travel": {
                "plan": [{"day": 1, "title": "Museum", "description": "Slow visit", "estimated_cost": 25}],
                "budget_breakdown": {"activities": 25}
            },
            "meals": {"ideas": [], "nearby_restaurants": []}
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_suggest_success() {
        let server = server(Arc::new(StubProvider::with_content(&trip_reply())));

        let response = server
            .post("/suggest")
            .json(&json!({"activity": "city trip", "budget": "80", "lat": 52.37, "lng": 4.9}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["travel"]["plan"][0]["title"], "Museum");
    }

    #[tokio::test]
    async fn test_suggest_empty_budget_yields_empty_travel() {
        let server = server(Arc::new(StubProvider::with_content(&trip_reply())));

        let response = server
            .post("/suggest")
            .json(&json!({"activity": "city trip", "budget": ""}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["travel"], json!({"plan": [], "budget_breakdown": {}}));
    }

    #[tokio::test]
    async fn test_suggest_malformed_body_is_400() {
        let provider = Arc::new(StubProvider::with_content("{}"));
        let server = server(provider.clone());

        let response = server
            .post("/suggest")
            .text("{\"activity\": \"sleep\", ")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["detail"].as_str().unwrap().starts_with("Invalid JSON syntax"));
        assert!(provider.requests().is_empty());
    }

    #[tokio::test]
    async fn test_suggest_missing_budget_is_400() {
        let server = server(Arc::new(StubProvider::with_content("{}")));

        let response = server
            .post("/suggest")
            .json(&json!({"activity": "sleep"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_suggest_blank_activity_is_400() {
        let provider = Arc::new(StubProvider::with_content("{}"));
        let server = server(provider.clone());

        let response = server
            .post("/suggest")
            .json(&json!({"activity": "  ", "budget": "10"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(provider.requests().is_empty());
    }

    #[tokio::test]
    async fn test_suggest_provider_failure_is_500() {
        let server = server(Arc::new(StubProvider::failing(|| {
            ProviderError::Network("connection reset".to_string())
        })));

        let response = server
            .post("/suggest")
            .json(&json!({"activity": "music", "budget": ""}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({"detail": "Provider request failed: connection reset"}));
    }

    #[tokio::test]
    async fn test_suggest_invalid_content_is_500() {
        let server = server(Arc::new(StubProvider::with_content("no json here")));

        let response = server
            .post("/suggest")
            .json(&json!({"activity": "music", "budget": ""}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert!(body["detail"].as_str().unwrap().contains("not valid JSON"));
    }

    #[tokio::test]
    async fn test_suggest_missing_choices_is_500() {
        let server = server(Arc::new(StubProvider::replying(200, json!({"choices": []}))));

        let response = server
            .post("/suggest")
            .json(&json!({"activity": "music", "budget": ""}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({"detail": "Provider response has no choices"}));
    }
}
