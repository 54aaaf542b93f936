//! Identifiers for chat messages and in-flight requests.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Identifier of a displayed chat message.
///
/// Derived from the wall clock in milliseconds. Only meant to key list
/// entries within one session, not to be globally unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    /// Create a new MessageId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Hands out time-derived message ids that never go backwards.
///
/// Two messages created in the same millisecond get consecutive values.
#[derive(Debug, Clone, Default)]
pub struct MessageIdClock {
    last_ms: i64,
}

impl MessageIdClock {
    /// Next id based on the current time.
    pub fn next(&mut self) -> MessageId {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next id based on the given timestamp (milliseconds).
    pub fn next_at(&mut self, now_ms: i64) -> MessageId {
        let ms = now_ms.max(self.last_ms + 1);
        self.last_ms = ms;
        MessageId(ms.to_string())
    }
}

/// Identifies the single in-flight reply request of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw counter value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_ids_are_monotonic_within_a_millisecond() {
        let mut clock = MessageIdClock::default();
        let a = clock.next_at(1_700_000_000_000);
        let b = clock.next_at(1_700_000_000_000);
        let c = clock.next_at(1_699_999_999_999);
        assert_eq!(a.as_str(), "1700000000000");
        assert_eq!(b.as_str(), "1700000000001");
        assert_eq!(c.as_str(), "1700000000002");
    }

    #[test]
    fn test_id_display() {
        let id = MessageId::new("42");
        assert_eq!(format!("{}", id), "42");
        assert_eq!(format!("{}", RequestToken::new(7)), "#7");
    }
}
