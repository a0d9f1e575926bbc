//! Stress-level classifier backed by artifacts exported from the training pipeline.
//!
//! Three files are read at startup:
//!
//! | Artifact | Shape |
//! |----------|-------|
//! | model | tree ensemble, see [`forest`] |
//! | feature list | JSON array of feature names, in model column order |
//! | encoders | JSON object `{feature: {"classes": [...]}}` |

mod artifacts;
mod encoder;
mod forest;

pub use artifacts::ModelArtifacts;
pub use encoder::LabelEncoder;
pub use forest::TreeEnsemble;

use thiserror::Error;

/// Errors raised while loading the artifacts
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Incompatible model artifacts: {0}")]
    Incompatible(String),
}

/// Errors raised while turning a request body into a prediction
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Missing feature: {0}")]
    MissingFeature(String),

    #[error("Feature '{feature}' must be numeric, got {value}")]
    NotNumeric { feature: String, value: String },

    #[error("Feature '{feature}' must be a string or number, got {value}")]
    InvalidCategory { feature: String, value: String },

    #[error("Feature '{feature}' has unseen label '{value}'")]
    UnseenLabel { feature: String, value: String },

    #[error("Model expects {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
