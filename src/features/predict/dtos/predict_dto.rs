use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Feature name to raw value, one entry per model feature
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(
    value_type = Object,
    example = json!({"gender": "Male", "sleep_hours": 6.5, "study_load": 3})
)]
pub struct PredictRequestDto(pub Map<String, Value>);

/// Predicted stress level with the matching recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictResponseDto {
    /// Label produced by the model (e.g. "Low", "Medium", "High")
    #[schema(example = "Medium")]
    pub stress_level: String,

    #[schema(example = "Go for a walk")]
    pub recommendation: String,
}
