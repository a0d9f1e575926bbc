//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the classifier runtime and the chat-completion provider client.

pub mod classifier;
pub mod openrouter;
