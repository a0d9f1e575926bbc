use schemars::gen::SchemaGenerator;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

/// Trait for structured replies we ask an LLM to produce
///
/// The schema is embedded in prompts so the model knows the exact shape
/// expected back.
pub trait LlmResponse: DeserializeOwned + JsonSchema {
    /// Generate JSON schema string for use in LLM prompts
    fn json_schema_string() -> String {
        let mut gen = SchemaGenerator::default();
        let schema = gen.root_schema_for::<Self>();
        serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
    }
}
