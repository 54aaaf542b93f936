//! Main render function for the TUI.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::UiState;
use crate::theme::Theme;
use crate::widgets::{ChatWidget, InputWidget, PersonaHeader};

const HELP: &str = "Enter send | Tab switch persona | Up/Down scroll | Esc quit";

/// Render the entire UI.
pub fn render(frame: &mut Frame, state: &UiState) {
    let area = frame.area();

    // Header, conversation, composer, footer
    let [header_area, chat_area, input_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let persona = state.session.persona();

    PersonaHeader::new(persona, state.backend).render(frame, header_area);

    ChatWidget::new(state.session.messages(), persona.display_name)
        .typing(state.session.is_typing())
        .scroll_back(state.scroll_back)
        .render(frame, chat_area);

    InputWidget::new(&state.input, format!("Message {}...", persona.display_name))
        .render(frame, input_area);

    render_footer(frame, footer_area, state);
}

/// Render the footer with the current notice or key help.
fn render_footer(frame: &mut Frame, area: Rect, state: &UiState) {
    let theme = Theme::default();
    let text = state.notice.as_deref().unwrap_or(HELP);
    frame.render_widget(Paragraph::new(text).style(theme.muted_style()), area);
}
