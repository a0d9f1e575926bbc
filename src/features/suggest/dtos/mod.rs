pub mod suggest_dto;

pub use suggest_dto::SuggestRequestDto;
