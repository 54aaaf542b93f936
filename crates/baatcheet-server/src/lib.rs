//! Baatcheet Backend Library
//!
//! This crate provides the HTTP dispatcher that binds each persona route to
//! a persona name and forwards the conversation to a response generator.

pub mod config;
pub mod generator;
pub mod http;
pub mod state;

pub use config::{GeneratorConfig, GeneratorKind, ServerConfig};
pub use generator::{GeneratorError, ResponseGenerator};
pub use state::AppState;
