use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InfoResponseDto {
    #[schema(example = "Stress relief API is running")]
    pub message: String,
    /// Endpoint path to a short description
    pub endpoints: BTreeMap<String, String>,
    /// Whether `/predict` can serve predictions
    pub model_loaded: bool,
}
