//! HTTP client for the persona routes.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use baatcheet_core::{AskRequest, Persona, Reply, ReplyTransport};

use crate::error::ClientError;

/// Backend used when nothing is configured at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Backend base URL baked in at build time via `BAATCHEET_BACKEND_URL`.
pub fn default_backend_url() -> &'static str {
    option_env!("BAATCHEET_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

/// The part of a generator reply the UI cares about.
#[derive(Debug, Deserialize)]
struct ReplyContent {
    content: String,
}

/// HTTP client for the Baatcheet backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    inner: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new client without a request timeout.
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a new client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the backend is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let url = format!("{}/health", self.base_url);
        debug!(url = %url, "Checking health");

        let response = self.inner.get(&url).send().await?;
        Ok(response.status().is_success())
    }

    /// Ask `persona` a question, replaying `request.history` as context.
    pub async fn ask(
        &self,
        persona: &Persona,
        request: &AskRequest,
    ) -> Result<Reply, ClientError> {
        let url = format!("{}{}", self.base_url, persona.path());
        debug!(
            url = %url,
            history_len = request.history.len(),
            "POST question"
        );

        let response = self.inner.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let reply: ReplyContent = serde_json::from_slice(&body)
            .map_err(|e| ClientError::Serialization(e.to_string()))?;

        Ok(Reply::assistant(reply.content))
    }
}

#[async_trait]
impl ReplyTransport for BackendClient {
    type Error = ClientError;

    async fn ask(
        &self,
        persona: &'static Persona,
        request: &AskRequest,
    ) -> Result<Reply, ClientError> {
        BackendClient::ask(self, persona, request).await
    }
}
