//! Chat widget for displaying conversation messages.

use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use baatcheet_core::{DisplayMessage, Sender};

use crate::theme::Theme;
use crate::utils::wrap_text_indented;

/// Conversation view with an optional typing indicator.
#[derive(Debug, Clone)]
pub struct ChatWidget<'a> {
    /// Messages to display.
    messages: &'a [DisplayMessage],
    /// Name shown for bot messages.
    bot_name: &'a str,
    /// Whether the persona is "typing".
    typing: bool,
    /// Lines scrolled back from the bottom.
    scroll_back: usize,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> ChatWidget<'a> {
    /// Create a new chat widget.
    pub fn new(messages: &'a [DisplayMessage], bot_name: &'a str) -> Self {
        Self {
            messages,
            bot_name,
            typing: false,
            scroll_back: 0,
            theme: Theme::default(),
        }
    }

    /// Show the typing indicator.
    pub fn typing(mut self, typing: bool) -> Self {
        self.typing = typing;
        self
    }

    /// Set how far the view is scrolled back.
    pub fn scroll_back(mut self, lines: usize) -> Self {
        self.scroll_back = lines;
        self
    }

    /// Build every line of the conversation for a given text width.
    fn lines(&self, text_width: usize) -> Vec<Line<'a>> {
        let mut all_lines: Vec<Line> = Vec::new();

        for msg in self.messages {
            let (name, style) = match msg.sender {
                Sender::User => ("You".to_string(), self.theme.user_style()),
                Sender::Bot => (self.bot_name.to_string(), self.theme.bot_style()),
            };

            all_lines.push(Line::from(vec![
                Span::styled(format!("{} ", name), style.add_modifier(Modifier::BOLD)),
                Span::styled(
                    msg.timestamp
                        .with_timezone(&Local)
                        .format("%H:%M")
                        .to_string(),
                    self.theme.muted_style(),
                ),
            ]));

            for wrapped_line in wrap_text_indented(&msg.text, text_width, "  ") {
                all_lines.push(Line::from(Span::raw(wrapped_line)));
            }

            all_lines.push(Line::from(""));
        }

        if self.typing {
            all_lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", self.bot_name),
                    self.theme.bot_style().add_modifier(Modifier::BOLD),
                ),
                Span::styled("is typing...", self.theme.muted_style()),
            ]));
        }

        all_lines
    }

    /// Render the widget.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let visible_height = area.height.saturating_sub(2) as usize;
        let text_width = area.width.saturating_sub(2) as usize;

        let all_lines = self.lines(text_width);
        let total_lines = all_lines.len();

        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll_offset = max_scroll - self.scroll_back.min(max_scroll);

        let lines: Vec<Line> = all_lines
            .into_iter()
            .skip(scroll_offset)
            .take(visible_height)
            .collect();

        let title = if scroll_offset < max_scroll {
            format!(" Messages [{} more below] ", max_scroll - scroll_offset)
        } else {
            " Messages ".to_string()
        };

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.unfocused_border())
                .title(title),
        );

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baatcheet_core::MessageId;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_label_senders_and_typing() {
        let messages = vec![
            DisplayMessage::new(MessageId::new("1"), Sender::Bot, "namaste"),
            DisplayMessage::new(MessageId::new("2"), Sender::User, "hi"),
        ];
        let widget = ChatWidget::new(&messages, "Piyush Garg").typing(true);
        let lines = widget.lines(40);

        assert!(line_text(&lines[0]).starts_with("Piyush Garg "));
        assert_eq!(line_text(&lines[1]), "  namaste");
        assert!(line_text(&lines[3]).starts_with("You "));
        assert_eq!(line_text(&lines[4]), "  hi");
        assert_eq!(line_text(lines.last().unwrap()), "Piyush Garg is typing...");
    }

    #[test]
    fn test_no_typing_line_when_idle() {
        let messages = vec![DisplayMessage::new(MessageId::new("1"), Sender::Bot, "yo")];
        let lines = ChatWidget::new(&messages, "Hitesh Choudhary").lines(40);
        assert_eq!(lines.len(), 3);
    }
}
