use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request DTO for `/chat`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ChatRequestDto {
    /// User message; an absent field is sent as an empty message
    #[serde(default)]
    #[schema(example = "I can't stop worrying about my exams")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_defaults_to_empty() {
        let dto: ChatRequestDto = serde_json::from_value(json!({})).unwrap();
        assert_eq!(dto.message, "");
    }
}
