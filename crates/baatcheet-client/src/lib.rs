//! Client library for the Baatcheet backend.
//!
//! Provides the HTTP client used by chat frontends to ask a persona a
//! question. [`BackendClient`] implements
//! [`ReplyTransport`](baatcheet_core::ReplyTransport), so it can be handed
//! straight to [`ChatSession::send_message`](baatcheet_core::ChatSession::send_message).

pub mod error;
pub mod http;

pub use error::ClientError;
pub use http::{default_backend_url, BackendClient, DEFAULT_BACKEND_URL};
