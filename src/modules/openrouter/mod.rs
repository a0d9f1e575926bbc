//! Chat-completion provider abstraction.
//!
//! Handlers talk to [`CompletionProvider`]; production wires in
//! [`OpenRouterClient`], tests substitute a stub.

mod client;

pub use client::OpenRouterClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Provider request failed: {0}")]
    Network(String),

    #[error("Provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Provider returned an invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// OpenAI-compatible chat-completion request body
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Per-call deadline; not part of the wire body
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

/// Raw provider answer: HTTP status plus the decoded JSON body
#[derive(Debug, Clone)]
pub struct ProviderReply {
    pub status: u16,
    pub body: Value,
}

impl ProviderReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx reply into [`ProviderError::Status`]
    pub fn error_for_status(self) -> Result<Self, ProviderError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ProviderError::Status {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }
}

/// Trait for chat-completion backends.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one completion request and return the decoded reply.
    ///
    /// Non-2xx statuses are not errors here; callers decide with
    /// [`ProviderReply::error_for_status`].
    async fn complete(&self, request: &CompletionRequest) -> Result<ProviderReply, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_completion_request_wire_format() {
        let request = CompletionRequest {
            model: "vendor/model".to_string(),
            messages: vec![ChatMessage::system("be kind"), ChatMessage::user("hi")],
            timeout: Some(Duration::from_secs(5)),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "vendor/model",
                "messages": [
                    {"role": "system", "content": "be kind"},
                    {"role": "user", "content": "hi"}
                ]
            })
        );
    }

    #[test]
    fn test_error_for_status() {
        let ok = ProviderReply {
            status: 200,
            body: json!({"id": "x"}),
        };
        assert!(ok.error_for_status().is_ok());

        let limited = ProviderReply {
            status: 429,
            body: json!({"error": {"message": "rate limited"}}),
        };
        let err = limited.error_for_status().unwrap_err();
        assert!(matches!(err, ProviderError::Status { status: 429, .. }));
        assert!(err.to_string().contains("rate limited"));
    }
}
