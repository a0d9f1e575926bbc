use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;

use crate::core::config::OpenRouterConfig;
use crate::core::error::{AppError, Result};
use crate::features::suggest::dtos::SuggestRequestDto;
use crate::features::suggest::models::{ActivityKind, Suggestion};
use crate::modules::openrouter::{ChatMessage, CompletionProvider, CompletionRequest};
use crate::shared::llm::{parse_json, LlmResponse};
use crate::shared::prompts::{render_suggest_prompt, SuggestPromptContext};

/// Builds the suggest prompt and turns the provider reply into a JSON object
pub struct SuggestService {
    provider: Arc<dyn CompletionProvider>,
    model: String,
    timeout: Duration,
    json_schema: String,
}

impl SuggestService {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            timeout,
            json_schema: Suggestion::json_schema_string(),
        }
    }

    pub fn from_config(provider: Arc<dyn CompletionProvider>, config: &OpenRouterConfig) -> Self {
        Self::new(provider, config.suggest_model.clone(), config.suggest_timeout)
    }

    pub async fn suggest(&self, dto: &SuggestRequestDto) -> Result<Value> {
        let prompt = self.build_prompt(dto)?;

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            timeout: Some(self.timeout),
        };

        let reply = self
            .provider
            .complete(&request)
            .await
            .and_then(|reply| reply.error_for_status())
            .map_err(|e| AppError::ExternalServiceError(e.to_string()))?;

        let content = message_content(&reply.body)?;

        let mut suggestion = match parse_json::<Value>(content) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                return Err(AppError::InvalidUpstreamResponse(
                    "Provider content is not a JSON object".to_string(),
                ))
            }
            Err(e) => {
                return Err(AppError::InvalidUpstreamResponse(format!(
                    "Provider content is not valid JSON: {}",
                    e
                )))
            }
        };

        if !dto.has_budget() {
            enforce_empty_budget(&mut suggestion);
        }

        let suggestion = Value::Object(suggestion);
        if let Err(e) = serde_json::from_value::<Suggestion>(suggestion.clone()) {
            tracing::warn!("Suggestion does not match the expected schema: {}", e);
        }

        Ok(suggestion)
    }

    fn build_prompt(&self, dto: &SuggestRequestDto) -> Result<String> {
        let activity = dto.activity.trim();
        let kind = ActivityKind::from_activity(activity);
        let location = dto.location();

        tracing::debug!(
            "Building suggestion for activity kind {} (budget: {}, location known: {})",
            kind,
            dto.has_budget(),
            location.known
        );

        let ctx = SuggestPromptContext {
            activity,
            activity_kind: kind.as_str(),
            budget: &dto.budget,
            location_clause: &location.clause,
            has_location: location.known,
            json_schema: &self.json_schema,
        };

        render_suggest_prompt(&ctx).map_err(|e| AppError::Internal(e.to_string()))
    }
}

/// `choices[0].message.content` of a chat-completion body
fn message_content(body: &Value) -> Result<&str> {
    let choice = body
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .ok_or_else(|| {
            AppError::InvalidUpstreamResponse("Provider response has no choices".to_string())
        })?;

    choice
        .pointer("/message/content")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            AppError::InvalidUpstreamResponse(
                "Provider response has no message content".to_string(),
            )
        })
}

/// Without a budget there is no travel plan: clear it whatever the provider sent
pub fn enforce_empty_budget(suggestion: &mut Map<String, Value>) {
    let travel = suggestion
        .entry("travel")
        .or_insert_with(|| Value::Object(Map::new()));

    if !travel.is_object() {
        *travel = Value::Object(Map::new());
    }

    if let Value::Object(travel) = travel {
        travel.insert("plan".to_string(), Value::Array(Vec::new()));
        travel.insert("budget_breakdown".to_string(), Value::Object(Map::new()));
    }
}
