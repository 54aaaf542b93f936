//! Conversation state for one chat window.
//!
//! A [`ChatSession`] owns the selected persona, the display list and the
//! role-tagged history. Both lists are only ever appended to in lockstep or
//! reset together, so after every completed turn they have the same length.
//!
//! Sending is split in two halves so that event-driven frontends can run
//! the network call elsewhere:
//!
//! 1. [`ChatSession::begin_send`] records the user turn and hands back a
//!    [`PendingRequest`] tagged with a [`RequestToken`].
//! 2. [`ChatSession::complete_send`] applies the reply (or the fallback
//!    text) for that token.
//!
//! Only one request may be pending at a time. Switching persona drops the
//! pending token, so a late reply for the previous persona is ignored.

use std::fmt;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::chat::{AskRequest, DisplayMessage, HistoryEntry, Reply, Sender};
use crate::error::CoreError;
use crate::ids::{MessageIdClock, RequestToken};
use crate::persona::Persona;

/// Reply substituted when the backend cannot be reached.
pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't get a response right now. Please try again later.";

/// Something that can carry a question to the backend and bring a reply back.
#[async_trait]
pub trait ReplyTransport: Send + Sync {
    type Error: fmt::Display + Send;

    /// Ask `persona` the question in `request`.
    async fn ask(
        &self,
        persona: &'static Persona,
        request: &AskRequest,
    ) -> Result<Reply, Self::Error>;
}

/// Whether the session is waiting for a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Sending(RequestToken),
}

/// A user turn that still needs a reply.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub token: RequestToken,
    pub persona: &'static Persona,
    /// Question plus the history as it was before this turn.
    pub request: AskRequest,
}

/// Result of starting a send.
#[derive(Debug, Clone)]
pub enum SendStart {
    /// Input was blank; nothing changed.
    Ignored,
    /// User turn recorded; the persona does not answer remotely.
    Recorded,
    /// User turn recorded; a reply must be fetched.
    Pending(PendingRequest),
}

/// Conversation with one persona at a time.
#[derive(Debug, Clone)]
pub struct ChatSession {
    persona: &'static Persona,
    messages: Vec<DisplayMessage>,
    history: Vec<HistoryEntry>,
    state: SessionState,
    next_token: u64,
    ids: MessageIdClock,
}

impl ChatSession {
    /// Start a session with `persona`, seeded with its greeting.
    pub fn new(persona: &'static Persona) -> Self {
        let mut session = Self {
            persona,
            messages: Vec::new(),
            history: Vec::new(),
            state: SessionState::Idle,
            next_token: 0,
            ids: MessageIdClock::default(),
        };
        session.reset(persona);
        session
    }

    /// Start a session with the persona identified by `id`.
    pub fn for_persona(id: &str) -> Result<Self, CoreError> {
        Persona::find(id)
            .map(Self::new)
            .ok_or_else(|| CoreError::UnknownPersona(id.to_string()))
    }

    pub fn persona(&self) -> &'static Persona {
        self.persona
    }

    pub fn messages(&self) -> &[DisplayMessage] {
        &self.messages
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True while a reply is pending.
    pub fn is_typing(&self) -> bool {
        matches!(self.state, SessionState::Sending(_))
    }

    /// Switch to the persona identified by `id`.
    ///
    /// Resets both lists to the new persona's greeting. Unknown ids are
    /// ignored and return `false`.
    pub fn switch_persona(&mut self, id: &str) -> bool {
        match Persona::find(id) {
            Some(persona) => {
                debug!(from = self.persona.id, to = persona.id, "Switching persona");
                self.reset(persona);
                true
            }
            None => {
                debug!(id = %id, "Ignoring unknown persona");
                false
            }
        }
    }

    /// Record a user turn and, for remote personas, prepare the request.
    pub fn begin_send(&mut self, text: &str) -> Result<SendStart, CoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(SendStart::Ignored);
        }
        if self.is_typing() {
            return Err(CoreError::RequestInFlight);
        }

        let prior_history = self.history.clone();
        self.push(Sender::User, text);

        if !self.persona.remote {
            return Ok(SendStart::Recorded);
        }

        self.next_token += 1;
        let token = RequestToken::new(self.next_token);
        self.state = SessionState::Sending(token);

        Ok(SendStart::Pending(PendingRequest {
            token,
            persona: self.persona,
            request: AskRequest {
                question: text.to_string(),
                history: prior_history,
            },
        }))
    }

    /// Apply the outcome of the request identified by `token`.
    ///
    /// Failures are replaced by [`FALLBACK_REPLY`]. Returns `false` when the
    /// token is not the one currently pending.
    pub fn complete_send<E: fmt::Display>(
        &mut self,
        token: RequestToken,
        result: Result<String, E>,
    ) -> bool {
        if self.state != SessionState::Sending(token) {
            debug!(token = %token, "Discarding stale reply");
            return false;
        }

        let text = match result {
            Ok(text) => text,
            Err(e) => {
                warn!(persona = self.persona.id, error = %e, "Reply request failed");
                FALLBACK_REPLY.to_string()
            }
        };

        self.push(Sender::Bot, text);
        self.state = SessionState::Idle;
        true
    }

    /// Run a full send cycle through `transport`.
    ///
    /// Returns `true` when a user turn was recorded.
    pub async fn send_message<T>(&mut self, text: &str, transport: &T) -> Result<bool, CoreError>
    where
        T: ReplyTransport + ?Sized,
    {
        let pending = match self.begin_send(text)? {
            SendStart::Ignored => return Ok(false),
            SendStart::Recorded => return Ok(true),
            SendStart::Pending(pending) => pending,
        };

        let result = transport
            .ask(pending.persona, &pending.request)
            .await
            .map(|reply| reply.content);
        self.complete_send(pending.token, result);
        Ok(true)
    }

    fn reset(&mut self, persona: &'static Persona) {
        self.persona = persona;
        self.messages.clear();
        self.history.clear();
        self.state = SessionState::Idle;
        self.push(Sender::Bot, persona.greeting);
    }

    fn push(&mut self, sender: Sender, text: impl Into<String>) {
        let message = DisplayMessage::new(self.ids.next(), sender, text);
        self.history.push(message.to_history());
        self.messages.push(message);
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(Persona::default_persona())
    }
}
