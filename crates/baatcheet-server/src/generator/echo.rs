//! Offline generator for local development.

use async_trait::async_trait;
use tracing::trace;

use baatcheet_core::{HistoryEntry, Reply};

use super::{GeneratorError, ResponseGenerator};

/// Replies with `"<persona>: <question>"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoGenerator;

#[async_trait]
impl ResponseGenerator for EchoGenerator {
    async fn generate(
        &self,
        persona_name: &str,
        question: &str,
        history: &[HistoryEntry],
    ) -> Result<Reply, GeneratorError> {
        trace!(persona = %persona_name, history_len = history.len(), "Echoing question");
        Ok(Reply::assistant(format!("{}: {}", persona_name, question)))
    }
}
