use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::core::config::OpenRouterConfig;
use crate::modules::openrouter::{ChatMessage, CompletionProvider, CompletionRequest, ProviderError};
use crate::shared::prompts::{render_chat_system_prompt, TemplateError};

#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Prompt(#[from] TemplateError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Forwards user messages to the completion provider under the chat persona
pub struct ChatService {
    provider: Arc<dyn CompletionProvider>,
    model: String,
    timeout: Option<Duration>,
}

impl ChatService {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        model: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            timeout,
        }
    }

    pub fn from_config(provider: Arc<dyn CompletionProvider>, config: &OpenRouterConfig) -> Self {
        Self::new(provider, config.chat_model.clone(), config.chat_timeout)
    }

    /// Send `[system, user]` and return the provider body as-is.
    ///
    /// The body is returned for every HTTP status the provider answers with.
    pub async fn chat(&self, message: &str) -> Result<Value, ChatError> {
        let system_prompt = render_chat_system_prompt()?;

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system_prompt), ChatMessage::user(message)],
            timeout: self.timeout,
        };

        let reply = self.provider.complete(&request).await?;

        if !reply.is_success() {
            tracing::warn!("Chat provider answered HTTP {}", reply.status);
        }

        Ok(reply.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::openrouter::Role;
    use crate::shared::test_helpers::{completion_body, StubProvider};
    use serde_json::json;

    #[tokio::test]
    async fn test_chat_sends_persona_then_message() {
        let provider = Arc::new(StubProvider::with_content("Let's breathe together."));
        let service = ChatService::new(provider.clone(), "vendor/chat-model", None);

        let body = service.chat("I feel overwhelmed").await.unwrap();

        assert_eq!(body, completion_body("Let's breathe together."));

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.model, "vendor/chat-model");
        assert_eq!(request.timeout, None);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert!(request.messages[0].content.contains("You are Calm"));
        assert_eq!(request.messages[1], ChatMessage::user("I feel overwhelmed"));
    }

    #[tokio::test]
    async fn test_empty_message_still_calls_provider() {
        let provider = Arc::new(StubProvider::with_content("Hi there"));
        let service = ChatService::new(provider.clone(), "m", None);

        service.chat("").await.unwrap();

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].messages[1].content, "");
    }

    #[tokio::test]
    async fn test_non_success_body_is_passed_through() {
        let error_body = json!({"error": {"message": "No auth credentials found", "code": 401}});
        let provider = Arc::new(StubProvider::replying(401, error_body.clone()));
        let service = ChatService::new(provider, "m", None);

        assert_eq!(service.chat("hi").await.unwrap(), error_body);
    }

    #[tokio::test]
    async fn test_configured_timeout_is_forwarded() {
        let provider = Arc::new(StubProvider::with_content("ok"));
        let service = ChatService::new(provider.clone(), "m", Some(Duration::from_secs(7)));

        service.chat("hi").await.unwrap();

        assert_eq!(provider.requests()[0].timeout, Some(Duration::from_secs(7)));
    }

    #[tokio::test]
    async fn test_provider_failure_is_error() {
        let provider = Arc::new(StubProvider::failing(|| {
            ProviderError::Network("connection refused".to_string())
        }));
        let service = ChatService::new(provider, "m", None);

        let err = service.chat("hi").await.unwrap_err();
        assert_eq!(err.to_string(), "Provider request failed: connection refused");
    }
}
