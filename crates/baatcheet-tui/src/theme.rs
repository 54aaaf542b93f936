//! Theme and style definitions.

use ratatui::style::{Color, Modifier, Style};

use crate::event::BackendStatus;

/// Theme configuration for the chat UI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary accent color (focused borders, selected persona)
    pub accent: Color,
    /// Backend reachable
    pub success: Color,
    /// Waiting on the backend
    pub warning: Color,
    /// Backend unreachable
    pub error: Color,
    /// Muted color (timestamps, hints)
    pub muted: Color,
    /// User message color
    pub user: Color,
    /// Persona message color
    pub bot: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Yellow,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
            user: Color::Cyan,
            bot: Color::Green,
        }
    }
}

impl Theme {
    /// Style for focused/active borders.
    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for unfocused borders.
    pub fn unfocused_border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for muted/secondary text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the selected persona tab.
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for user messages.
    pub fn user_style(&self) -> Style {
        Style::default().fg(self.user)
    }

    /// Style for persona messages.
    pub fn bot_style(&self) -> Style {
        Style::default().fg(self.bot)
    }

    /// Color of the backend status badge.
    pub fn status_color(&self, status: BackendStatus) -> Color {
        match status {
            BackendStatus::Connecting => self.warning,
            BackendStatus::Online => self.success,
            BackendStatus::Offline => self.error,
        }
    }
}
