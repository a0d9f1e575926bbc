use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::modules::classifier::{LabelEncoder, ModelArtifacts, TreeEnsemble};
use crate::modules::openrouter::{
    CompletionProvider, CompletionRequest, ProviderError, ProviderReply,
};

/// Three-feature model: `sleep_hours <= 6` then `gender` decide between
/// High / Medium, more sleep is Low.
pub fn sample_artifacts() -> ModelArtifacts {
    let model: TreeEnsemble = serde_json::from_value(json!({
        "kind": "decision_tree",
        "classes": ["High", "Low", "Medium"],
        "n_features": 3,
        "trees": [{
            "children_left": [1, 3, -1, -1, -1],
            "children_right": [2, 4, -1, -1, -1],
            "feature": [1, 0, -2, -2, -2],
            "threshold": [6.0, 0.5, -2.0, -2.0, -2.0],
            "value": [
                [3.0, 3.0, 3.0],
                [2.0, 0.0, 2.0],
                [0.0, 4.0, 1.0],
                [3.0, 0.0, 1.0],
                [0.0, 0.0, 4.0]
            ]
        }]
    }))
    .unwrap();

    let mut encoders = HashMap::new();
    encoders.insert(
        "gender".to_string(),
        LabelEncoder::new(vec!["Female".to_string(), "Male".to_string()]),
    );

    ModelArtifacts::from_parts(
        model,
        vec![
            "gender".to_string(),
            "sleep_hours".to_string(),
            "study_load".to_string(),
        ],
        encoders,
    )
    .unwrap()
}

type Responder = Box<dyn Fn() -> Result<ProviderReply, ProviderError> + Send + Sync>;

/// Provider double that records requests and answers with a canned reply
pub struct StubProvider {
    responder: Responder,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubProvider {
    pub fn replying(status: u16, body: Value) -> Self {
        Self::with(move || {
            Ok(ProviderReply {
                status,
                body: body.clone(),
            })
        })
    }

    /// 200 reply whose first choice carries `content`
    pub fn with_content(content: &str) -> Self {
        Self::replying(200, completion_body(content))
    }

    pub fn failing(make_error: fn() -> ProviderError) -> Self {
        Self::with(move || Err(make_error()))
    }

    fn with(
        responder: impl Fn() -> Result<ProviderReply, ProviderError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<ProviderReply, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.responder)()
    }
}

/// OpenAI-style completion body with a single assistant message
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "gen-test",
        "model": "test/model",
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "message": {"role": "assistant", "content": content}
        }]
    })
}
