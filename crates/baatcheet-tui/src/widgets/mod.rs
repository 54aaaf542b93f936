//! Chat UI widgets.

pub mod chat;
pub mod header;
pub mod input;

pub use chat::ChatWidget;
pub use header::PersonaHeader;
pub use input::InputWidget;
