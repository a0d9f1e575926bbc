pub mod config;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod openapi;
