//! Passthrough chat with a fixed supportive persona.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/chat` | Forward a message and return the raw provider completion |
//!
//! Failures are reported as `{"error": "..."}` with status 200.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::ChatService;
