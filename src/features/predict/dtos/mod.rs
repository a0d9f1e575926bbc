pub mod predict_dto;

pub use predict_dto::{PredictRequestDto, PredictResponseDto};
