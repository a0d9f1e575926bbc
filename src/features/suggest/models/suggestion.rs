//! Shape of the JSON object the provider is asked to return from `/suggest`.
//!
//! The schema generated from these types is embedded in the prompt; replies
//! are checked against them but returned as the provider produced them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::shared::llm::LlmResponse;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct Suggestion {
    /// The activity the user asked for
    pub activity: String,
    /// One or two encouraging sentences
    pub summary: String,
    pub sleep: SleepSection,
    pub music: MusicSection,
    pub breathing: BreathingSection,
    pub exercise: ExerciseSection,
    pub travel: TravelSection,
    pub video: VideoSection,
    pub reading: ReadingSection,
    pub meals: MealsSection,
}

impl LlmResponse for Suggestion {}

/// A song, playlist or video
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct MediaItem {
    pub title: String,
    pub creator: String,
    /// Empty when no well-known link is certain
    pub url: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct SleepSection {
    pub tips: Vec<String>,
    pub bedtime_routine: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct MusicSection {
    pub tracks: Vec<MediaItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct BreathingExercise {
    pub name: String,
    pub steps: Vec<String>,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct BreathingSection {
    pub exercises: Vec<BreathingExercise>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct ExerciseRoutine {
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    /// "light", "moderate" or "vigorous"
    pub intensity: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct ExerciseSection {
    pub routines: Vec<ExerciseRoutine>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct TravelStop {
    /// Day number, starting at 1
    pub day: u32,
    pub title: String,
    pub description: String,
    pub estimated_cost: f64,
}

/// Both fields are empty when the user gave no budget
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct TravelSection {
    pub plan: Vec<TravelStop>,
    /// Cost category to amount
    pub budget_breakdown: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct VideoSection {
    pub videos: Vec<MediaItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct ReadingItem {
    pub title: String,
    pub author: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct ReadingSection {
    pub items: Vec<ReadingItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct MealIdea {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub address: String,
    /// 1 (cheap) to 4 (expensive)
    pub price_level: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct MealsSection {
    pub ideas: Vec<MealIdea>,
    /// Empty when the user's location is unknown
    pub nearby_restaurants: Vec<Restaurant>,
}
