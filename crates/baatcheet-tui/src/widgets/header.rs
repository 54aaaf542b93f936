//! Header showing the active persona and the persona tabs.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use baatcheet_core::Persona;

use crate::event::BackendStatus;
use crate::theme::Theme;

/// Header widget with title, backend status and persona tabs.
#[derive(Debug, Clone)]
pub struct PersonaHeader {
    /// Persona currently chatting.
    active: &'static Persona,
    /// Backend reachability badge.
    status: BackendStatus,
    /// Theme for styling.
    theme: Theme,
}

impl PersonaHeader {
    pub fn new(active: &'static Persona, status: BackendStatus) -> Self {
        Self {
            active,
            status,
            theme: Theme::default(),
        }
    }

    fn status_label(&self) -> &'static str {
        match self.status {
            BackendStatus::Connecting => "Connecting",
            BackendStatus::Online => "Online",
            BackendStatus::Offline => "Offline",
        }
    }

    /// Render the header.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::raw(format!(" Chat with {} ", self.active.display_name)),
            Span::styled(
                format!("[{}]", self.status_label()),
                Style::default().fg(self.theme.status_color(self.status)),
            ),
            Span::raw(" "),
        ]);

        let personas = Persona::all();
        let selected = personas
            .iter()
            .position(|p| p.id == self.active.id)
            .unwrap_or(0);

        let tab_titles: Vec<Line> = personas
            .iter()
            .map(|p| Line::from(format!(" {} ", p.display_name)))
            .collect();

        let tabs = Tabs::new(tab_titles)
            .block(Block::default().title(title).borders(Borders::ALL))
            .select(selected)
            .highlight_style(self.theme.selected_style())
            .divider("|");

        frame.render_widget(tabs, area);
    }
}
