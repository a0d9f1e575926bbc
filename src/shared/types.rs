use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned with a non-2xx status code
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Error body returned with status 200 by the lenient endpoints (`/predict`, `/chat`)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
