use utoipa::{Modify, OpenApi};

use crate::features::chat::{dtos as chat_dtos, handlers as chat_handlers};
use crate::features::info::{dtos as info_dtos, handlers as info_handlers};
use crate::features::predict::{dtos as predict_dtos, handlers as predict_handlers};
use crate::features::suggest::{
    dtos as suggest_dtos, handlers as suggest_handlers, models as suggest_models,
};
use crate::shared::types::{ErrorDetail, ErrorMessage};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Info
        info_handlers::info,
        info_handlers::health,
        // Predict
        predict_handlers::predict,
        // Chat
        chat_handlers::chat,
        // Suggest
        suggest_handlers::suggest,
    ),
    components(
        schemas(
            // Shared
            ErrorDetail,
            ErrorMessage,
            // Info
            info_dtos::InfoResponseDto,
            // Predict
            predict_dtos::PredictRequestDto,
            predict_dtos::PredictResponseDto,
            // Chat
            chat_dtos::ChatRequestDto,
            // Suggest
            suggest_dtos::SuggestRequestDto,
            suggest_models::Suggestion,
            suggest_models::MediaItem,
            suggest_models::SleepSection,
            suggest_models::MusicSection,
            suggest_models::BreathingExercise,
            suggest_models::BreathingSection,
            suggest_models::ExerciseRoutine,
            suggest_models::ExerciseSection,
            suggest_models::TravelStop,
            suggest_models::TravelSection,
            suggest_models::VideoSection,
            suggest_models::ReadingItem,
            suggest_models::ReadingSection,
            suggest_models::MealIdea,
            suggest_models::Restaurant,
            suggest_models::MealsSection,
        )
    ),
    tags(
        (name = "info", description = "Service information and health"),
        (name = "predict", description = "Stress-level classification"),
        (name = "chat", description = "Supportive chat assistant"),
        (name = "suggest", description = "Structured stress-relief suggestions"),
    ),
    info(
        title = "Stress Relief API",
        version = "0.1.0",
        description = "Stress prediction, supportive chat and activity suggestions",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
