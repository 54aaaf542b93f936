//! Core domain errors.

use thiserror::Error;

/// Core domain errors for Baatcheet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A reply is still pending for this session.
    #[error("A request is already in flight for this conversation")]
    RequestInFlight,

    /// Persona id is not part of the catalog.
    #[error("Unknown persona: {0}")]
    UnknownPersona(String),
}
