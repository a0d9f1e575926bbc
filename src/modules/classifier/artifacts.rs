use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

use super::{ArtifactError, LabelEncoder, PredictionError, TreeEnsemble};
use crate::core::config::ArtifactsConfig;

/// Model, feature order and encoders, loaded together and never mutated
#[derive(Debug)]
pub struct ModelArtifacts {
    model: TreeEnsemble,
    features: Vec<String>,
    encoders: HashMap<String, LabelEncoder>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.display().to_string(),
        source,
    })
}

impl ModelArtifacts {
    /// Read all three artifacts from disk and check they belong together
    pub fn load(config: &ArtifactsConfig) -> Result<Self, ArtifactError> {
        let model: TreeEnsemble = read_json(&config.model_path)?;
        let features: Vec<String> = read_json(&config.features_path)?;
        let encoders: HashMap<String, LabelEncoder> = read_json(&config.encoders_path)?;

        tracing::debug!(
            "Read model artifacts: {} features, {} encoders, {} classes",
            features.len(),
            encoders.len(),
            model.classes().len()
        );
        for (name, encoder) in &encoders {
            tracing::debug!("Encoder '{}': {} categories", name, encoder.classes().len());
        }

        Self::from_parts(model, features, encoders)
    }

    pub fn from_parts(
        model: TreeEnsemble,
        features: Vec<String>,
        encoders: HashMap<String, LabelEncoder>,
    ) -> Result<Self, ArtifactError> {
        model.validate().map_err(ArtifactError::Incompatible)?;

        if features.is_empty() {
            return Err(ArtifactError::Incompatible(
                "feature list is empty".to_string(),
            ));
        }

        if model.n_features() != features.len() {
            return Err(ArtifactError::Incompatible(format!(
                "model expects {} features but the feature list has {}",
                model.n_features(),
                features.len()
            )));
        }

        if let Some(unknown) = encoders.keys().find(|name| !features.contains(name)) {
            return Err(ArtifactError::Incompatible(format!(
                "encoder defined for unlisted feature '{}'",
                unknown
            )));
        }

        Ok(Self {
            model,
            features,
            encoders,
        })
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn model(&self) -> &TreeEnsemble {
        &self.model
    }

    /// Build the model input row in feature-list order.
    ///
    /// Encoded features go through their label encoder; every other feature
    /// must be a number or a numeric string.
    pub fn encode_row(&self, input: &Map<String, Value>) -> Result<Vec<f64>, PredictionError> {
        self.features
            .iter()
            .map(|name| {
                let raw = input
                    .get(name)
                    .ok_or_else(|| PredictionError::MissingFeature(name.clone()))?;

                match self.encoders.get(name) {
                    Some(encoder) => encoder.transform(name, raw),
                    None => parse_numeric(name, raw),
                }
            })
            .collect()
    }

    /// Predicted stress label for a request body
    pub fn predict(&self, input: &Map<String, Value>) -> Result<String, PredictionError> {
        let row = self.encode_row(input)?;
        self.model.predict(&row).map(str::to_string)
    }
}

fn parse_numeric(feature: &str, raw: &Value) -> Result<f64, PredictionError> {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };

    parsed.ok_or_else(|| PredictionError::NotNumeric {
        feature: feature.to_string(),
        value: raw.to_string(),
    })
}
