//! Generator backed by an OpenAI-compatible chat completions endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use baatcheet_core::{HistoryEntry, Reply, Role};

use super::{system_prompt, GeneratorError, ResponseGenerator};
use crate::config::GeneratorConfig;

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatCompletionMessage<'a>>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct ChatCompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat completions client.
pub struct OpenAiGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiGenerator {
    /// Create a generator from config. Requires an API key.
    pub fn new(config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GeneratorError::Config("API key is required for the openai generator".to_string())
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeneratorError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
        })
    }
}

/// System prompt, then the replayed history, then the new question.
fn build_messages<'a>(
    system: &'a str,
    question: &'a str,
    history: &'a [HistoryEntry],
) -> Vec<ChatCompletionMessage<'a>> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatCompletionMessage {
        role: "system",
        content: system,
    });
    messages.extend(history.iter().map(|entry| ChatCompletionMessage {
        role: entry.role.as_str(),
        content: &entry.content,
    }));
    messages.push(ChatCompletionMessage {
        role: Role::User.as_str(),
        content: question,
    });
    messages
}

#[async_trait]
impl ResponseGenerator for OpenAiGenerator {
    async fn generate(
        &self,
        persona_name: &str,
        question: &str,
        history: &[HistoryEntry],
    ) -> Result<Reply, GeneratorError> {
        let system = system_prompt(persona_name);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: build_messages(&system, question, history),
        };

        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!(
            url = %url,
            model = %self.model,
            persona = %persona_name,
            messages = body.messages.len(),
            "Requesting chat completion"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeneratorError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Chat completion failed");
            return Err(GeneratorError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GeneratorError::Unavailable(e.to_string())
            } else {
                GeneratorError::InvalidPayload(e.to_string())
            }
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(Reply::assistant)
            .ok_or(GeneratorError::EmptyReply)
    }
}
