//! Structured stress-relief suggestions generated by a language model.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/suggest` | Build a plan for an activity, budget and location |
//!
//! Invalid bodies are rejected with 400; provider failures and unusable
//! replies answer 500. Both carry `{"detail": "..."}`.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SuggestService;
