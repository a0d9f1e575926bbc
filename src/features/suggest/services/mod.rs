pub mod suggest_service;

pub use suggest_service::SuggestService;
