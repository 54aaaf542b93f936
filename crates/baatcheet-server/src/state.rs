//! Shared application state.

use std::sync::Arc;

use crate::generator::ResponseGenerator;

/// Shared application state.
///
/// Requests are independent; the only shared piece is the generator handle.
pub struct AppState {
    /// Generator that produces persona replies.
    pub generator: Arc<dyn ResponseGenerator>,
}

impl AppState {
    /// Create a new AppState wrapped in Arc.
    pub fn new(generator: Arc<dyn ResponseGenerator>) -> Arc<Self> {
        Arc::new(Self { generator })
    }
}
