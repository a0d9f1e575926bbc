use async_trait::async_trait;
use serde_json::Value;

use super::{CompletionProvider, CompletionRequest, ProviderError, ProviderReply};
use crate::core::config::OpenRouterConfig;

/// HTTP client for the OpenRouter chat-completions API
pub struct OpenRouterClient {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
    app_title: Option<String>,
}

impl OpenRouterClient {
    pub fn new(config: &OpenRouterConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("stress-relief-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::NotConfigured(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.completions_url(),
            api_key: config.api_key.clone(),
            app_title: config.app_title.clone(),
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<ProviderReply, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ProviderError::NotConfigured("OPENROUTER_API_KEY is not set".to_string())
        })?;

        let mut builder = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(request);

        if let Some(title) = &self.app_title {
            builder = builder.header("X-Title", title);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        tracing::debug!(
            "Sending completion request: model={}, messages={}",
            request.model,
            request.messages.len()
        );

        let response = builder.send().await.map_err(|e| {
            tracing::error!("OpenRouter request failed: {:?}", e);
            ProviderError::Network(e.to_string())
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::error!("Failed to read OpenRouter response body: {:?}", e);
            ProviderError::Network(e.to_string())
        })?;

        if !status.is_success() {
            tracing::warn!("OpenRouter returned status: {}", status);
        }

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            ProviderError::InvalidResponse(format!(
                "HTTP {} with non-JSON body ({}): {}",
                status.as_u16(),
                e,
                text.chars().take(200).collect::<String>()
            ))
        })?;

        Ok(ProviderReply {
            status: status.as_u16(),
            body,
        })
    }
}
