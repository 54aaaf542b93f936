//! Event types for communication between the backend thread and the UI.

use baatcheet_core::{PendingRequest, RequestToken};

/// Reachability of the backend as last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    /// No request has completed yet.
    #[default]
    Connecting,
    Online,
    Offline,
}

/// Events sent from the backend thread to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    /// A reply (or the transport error) for a pending request.
    Reply {
        token: RequestToken,
        result: Result<String, String>,
    },

    /// Backend reachability changed.
    Status(BackendStatus),
}

/// Commands sent from the UI thread to the backend thread.
#[derive(Debug)]
pub enum BackendCommand {
    /// Fetch a reply for a recorded user turn.
    Ask(PendingRequest),

    /// Quit the application.
    Quit,
}
