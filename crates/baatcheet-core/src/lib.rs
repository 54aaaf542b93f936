//! Baatcheet Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - HTTP client or server
//! - Terminal rendering
//! - Runtime specifics
//!
//! The conversation state machine lives here so that any frontend can
//! drive it and tests can exercise it without a terminal.

pub mod chat;
pub mod error;
pub mod ids;
pub mod persona;
pub mod session;

// Re-export commonly used types
pub use chat::{AskRequest, DisplayMessage, HistoryEntry, Reply, Role, Sender};
pub use error::CoreError;
pub use ids::{MessageId, MessageIdClock, RequestToken};
pub use persona::Persona;
pub use session::{
    ChatSession, PendingRequest, ReplyTransport, SendStart, SessionState, FALLBACK_REPLY,
};
