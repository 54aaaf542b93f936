//! Message composer.

use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::InputLine;
use crate::theme::Theme;
use crate::utils::display_width;

/// Single-line input box with a placeholder.
#[derive(Debug, Clone)]
pub struct InputWidget<'a> {
    input: &'a InputLine,
    placeholder: String,
    theme: Theme,
}

impl<'a> InputWidget<'a> {
    pub fn new(input: &'a InputLine, placeholder: impl Into<String>) -> Self {
        Self {
            input,
            placeholder: placeholder.into(),
            theme: Theme::default(),
        }
    }

    /// Render the widget and place the terminal cursor.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;

        // Keep the cursor visible by dropping text from the left
        let before = display_width(self.input.before_cursor());
        let skip_cols = before.saturating_sub(inner_width.saturating_sub(1));

        let mut skipped = 0;
        let content = if self.input.text().is_empty() {
            Line::from(Span::styled(self.placeholder, self.theme.muted_style()))
        } else {
            let visible: String = self
                .input
                .text()
                .chars()
                .skip_while(|c| {
                    let w = display_width(c.encode_utf8(&mut [0; 4]));
                    if skipped < skip_cols {
                        skipped += w;
                        true
                    } else {
                        false
                    }
                })
                .collect();
            Line::from(visible)
        };

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.focused_border()),
        );
        frame.render_widget(paragraph, area);

        let cursor_x = area.x + 1 + before.saturating_sub(skipped) as u16;
        frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}
