//! Stress-level prediction from self-reported attributes.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/predict` | Classify stress level and recommend an activity |
//!
//! Failures are reported as `{"error": "..."}` with status 200.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::PredictionService;
