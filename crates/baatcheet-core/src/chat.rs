//! Chat message types for the display list, the generator history and the
//! wire contract between UI and backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::MessageId;

/// Role of a history entry, in the generator's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User message (question).
    User,
    /// Assistant message (persona reply or greeting).
    Assistant,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Who a displayed message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl From<Sender> for Role {
    fn from(sender: Sender) -> Self {
        match sender {
            Sender::User => Role::User,
            Sender::Bot => Role::Assistant,
        }
    }
}

/// A role-tagged message replayed to the generator on every turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub content: String,
}

impl HistoryEntry {
    /// Create a new history entry.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user entry.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant entry.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// A message as rendered in the chat window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl DisplayMessage {
    /// Create a display message stamped with the current time.
    pub fn new(id: MessageId, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    /// The history entry mirroring this message.
    pub fn to_history(&self) -> HistoryEntry {
        HistoryEntry::new(self.sender.into(), self.text.clone())
    }
}

/// Request body accepted by every persona route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Generator output relayed to the UI. The UI only reads `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub role: Role,
    pub content: String,
}

impl Reply {
    /// Create an assistant reply.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_history_wire_format() {
        let entry = HistoryEntry::assistant("namaste");
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"role": "assistant", "content": "namaste"})
        );
    }

    #[test]
    fn test_ask_request_history_defaults_to_empty() {
        let req: AskRequest = serde_json::from_value(json!({"question": "hi"})).unwrap();
        assert_eq!(req.question, "hi");
        assert!(req.history.is_empty());
    }

    #[test]
    fn test_display_message_retags_sender() {
        let msg = DisplayMessage::new(MessageId::new("1"), Sender::Bot, "hello");
        assert_eq!(msg.to_history(), HistoryEntry::assistant("hello"));
    }
}
