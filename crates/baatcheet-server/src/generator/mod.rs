//! Response generators.
//!
//! A generator turns `(persona name, question, history)` into a persona
//! reply. The HTTP layer treats it as an opaque collaborator and relays
//! whatever it returns.

mod echo;
mod openai;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use baatcheet_core::{HistoryEntry, Reply};

use crate::config::{GeneratorConfig, GeneratorKind};

pub use echo::EchoGenerator;
pub use openai::OpenAiGenerator;

/// Errors produced by a response generator.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Generator could not be reached (connect failure, timeout).
    #[error("Generator unavailable: {0}")]
    Unavailable(String),

    /// Generator answered with a non-success status.
    #[error("Generator returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Generator answered with something that is not a reply.
    #[error("Invalid generator payload: {0}")]
    InvalidPayload(String),

    /// Generator answered without any reply text.
    #[error("Generator returned no reply")]
    EmptyReply,

    /// Generator is misconfigured.
    #[error("Generator configuration error: {0}")]
    Config(String),
}

/// Produces persona replies.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Answer `question` as `persona_name`, given the prior `history`.
    async fn generate(
        &self,
        persona_name: &str,
        question: &str,
        history: &[HistoryEntry],
    ) -> Result<Reply, GeneratorError>;
}

/// Build the generator selected by `config`.
pub fn from_config(config: &GeneratorConfig) -> Result<Arc<dyn ResponseGenerator>, GeneratorError> {
    match config.kind {
        GeneratorKind::Openai => Ok(Arc::new(OpenAiGenerator::new(config)?)),
        GeneratorKind::Echo => Ok(Arc::new(EchoGenerator)),
    }
}

/// System prompt that puts the model in character.
pub fn system_prompt(persona_name: &str) -> String {
    let style = match persona_name {
        "Hitesh Choudhary" => {
            "You are a warm, chai-loving coding teacher who runs the 'Chai aur Code' channel. \
             You speak in friendly Hinglish, start answers with a relaxed 'Haanji', use simple \
             real-world analogies, and always nudge the learner to build projects."
        }
        "Piyush Garg" => {
            "You are an energetic full-stack engineer and educator. You speak in crisp Hinglish, \
             get straight to the point, favour system-design thinking and production examples, \
             and like to end with a concrete next step."
        }
        _ => "You are a helpful programming mentor who answers in friendly Hinglish.",
    };

    format!(
        "You are {name}. {style} Stay in character as {name}, keep replies short and \
         conversational, and never mention that you are an AI model.",
        name = persona_name,
        style = style
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_names_persona() {
        let prompt = system_prompt("Piyush Garg");
        assert!(prompt.starts_with("You are Piyush Garg."));
        assert!(prompt.contains("system-design"));
    }

    #[test]
    fn test_system_prompt_unknown_persona() {
        let prompt = system_prompt("Someone Else");
        assert!(prompt.contains("Someone Else"));
        assert!(prompt.contains("programming mentor"));
    }

    #[test]
    fn test_openai_requires_api_key() {
        let config = GeneratorConfig::default();
        match from_config(&config) {
            Err(GeneratorError::Config(msg)) => assert!(msg.contains("API key")),
            Err(e) => panic!("Expected Config error, got {}", e),
            Ok(_) => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_echo_needs_no_key() {
        let config = GeneratorConfig {
            kind: GeneratorKind::Echo,
            ..Default::default()
        };
        assert!(from_config(&config).is_ok());
    }
}
