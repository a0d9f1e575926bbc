use serde::Deserialize;
use serde_json::Value;

use super::PredictionError;

/// Categorical-to-numeric encoder fitted offline.
///
/// Mirrors a label encoder: the encoded value of a category is its index in
/// `classes`. Categories outside the fitted set are rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Encode a raw request value for `feature`
    pub fn transform(&self, feature: &str, raw: &Value) -> Result<f64, PredictionError> {
        let label = category_label(raw).ok_or_else(|| PredictionError::InvalidCategory {
            feature: feature.to_string(),
            value: raw.to_string(),
        })?;

        self.classes
            .iter()
            .position(|class| *class == label)
            .map(|index| index as f64)
            .ok_or_else(|| PredictionError::UnseenLabel {
                feature: feature.to_string(),
                value: label,
            })
    }
}

/// String form used to look a JSON scalar up in the fitted classes
fn category_label(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
