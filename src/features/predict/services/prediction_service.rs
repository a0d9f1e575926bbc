use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::config::ArtifactsConfig;
use crate::features::predict::dtos::PredictResponseDto;
use crate::modules::classifier::{ModelArtifacts, PredictionError};

/// Recommendation per stress label; labels are matched exactly
const RECOMMENDATIONS: &[(&str, &str)] = &[
    ("Low", "Listen to calming music"),
    ("Medium", "Go for a walk"),
    ("High", "Take deep breaths and meditate"),
];

const NO_RECOMMENDATION: &str = "No suggestion available";

pub fn recommendation_for(stress_level: &str) -> &'static str {
    RECOMMENDATIONS
        .iter()
        .find(|(label, _)| *label == stress_level)
        .map(|(_, recommendation)| *recommendation)
        .unwrap_or(NO_RECOMMENDATION)
}

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Prediction model is not loaded: {0}")]
    NotLoaded(String),

    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

enum ModelState {
    Ready(ModelArtifacts),
    Unavailable(String),
}

/// Runs the stress classifier against request bodies
pub struct PredictionService {
    state: ModelState,
}

impl PredictionService {
    pub fn new(artifacts: ModelArtifacts) -> Self {
        Self {
            state: ModelState::Ready(artifacts),
        }
    }

    /// Service that answers every prediction with `reason`
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: ModelState::Unavailable(reason.into()),
        }
    }

    /// Load artifacts from disk; a failed load leaves `/predict` answering with an error
    pub fn from_config(config: &ArtifactsConfig) -> Self {
        match ModelArtifacts::load(config) {
            Ok(artifacts) => {
                tracing::info!(
                    "Model artifacts loaded: {} features, classes {:?}",
                    artifacts.features().len(),
                    artifacts.model().classes()
                );
                Self::new(artifacts)
            }
            Err(e) => {
                tracing::error!("Model artifacts not available: {}. /predict will fail.", e);
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ModelState::Ready(_))
    }

    pub fn predict(&self, input: &Map<String, Value>) -> Result<PredictResponseDto, PredictError> {
        let artifacts = match &self.state {
            ModelState::Ready(artifacts) => artifacts,
            ModelState::Unavailable(reason) => return Err(PredictError::NotLoaded(reason.clone())),
        };

        let stress_level = artifacts.predict(input)?;

        tracing::debug!("Predicted stress level: {}", stress_level);

        let recommendation = recommendation_for(&stress_level).to_string();
        Ok(PredictResponseDto {
            stress_level,
            recommendation,
        })
    }
}
