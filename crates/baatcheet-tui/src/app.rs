//! Application state and main event loop.

use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::{info, warn};

use baatcheet_core::{ChatSession, CoreError, SendStart};

use crate::event::{BackendCommand, UiEvent};
use crate::render;
use crate::state::UiState;

/// Lines moved per PageUp/PageDown.
const PAGE: usize = 10;

/// Main application with UI state and channel handles.
pub struct App {
    /// UI state, including the conversation.
    state: UiState,

    /// Receiver for events from the backend.
    ui_rx: mpsc::Receiver<UiEvent>,

    /// Sender for commands to the backend.
    cmd_tx: mpsc::Sender<BackendCommand>,
}

impl App {
    /// Create a new application instance with channel handles.
    pub fn new(
        session: ChatSession,
        ui_rx: mpsc::Receiver<UiEvent>,
        cmd_tx: mpsc::Sender<BackendCommand>,
    ) -> Self {
        Self {
            state: UiState::new(session),
            ui_rx,
            cmd_tx,
        }
    }

    /// Run the main event loop.
    ///
    /// This runs on the main thread and handles:
    /// - Drawing the UI
    /// - Processing keyboard input
    /// - Receiving replies from the backend
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        loop {
            terminal.draw(|frame| render::render(frame, &self.state))?;

            // Poll terminal events (non-blocking with short timeout)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) {
                        break; // quit requested
                    }
                }
            }

            // Process backend events (non-blocking)
            while let Ok(event) = self.ui_rx.try_recv() {
                self.apply_event(event);
            }
        }

        // Send quit command to backend
        let _ = self.cmd_tx.blocking_send(BackendCommand::Quit);

        Ok(())
    }

    /// Apply an event from the backend to the UI state.
    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Reply { token, result } => {
                if self.state.session.complete_send(token, result) {
                    self.state.follow();
                }
            }
            UiEvent::Status(status) => {
                self.state.backend = status;
            }
        }
    }

    /// Handle a key press.
    ///
    /// Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match key.code {
            KeyCode::Esc => return true,

            KeyCode::Enter => self.send(),

            // Cycle personas; each switch starts a fresh conversation
            KeyCode::Tab => {
                let next = self.state.session.persona().next();
                if self.state.session.switch_persona(next.id) {
                    info!(persona = next.id, "Switched persona");
                    self.state.notice = None;
                    self.state.follow();
                }
            }

            // Scrolling
            KeyCode::Up => self.state.scroll_up(1),
            KeyCode::Down => self.state.scroll_down(1),
            KeyCode::PageUp => self.state.scroll_up(PAGE),
            KeyCode::PageDown => self.state.scroll_down(PAGE),

            // Editing (unicode-safe)
            KeyCode::Char(c) => self.state.input.insert(c),
            KeyCode::Backspace => self.state.input.backspace(),
            KeyCode::Delete => self.state.input.delete(),
            KeyCode::Left => self.state.input.left(),
            KeyCode::Right => self.state.input.right(),
            KeyCode::Home => self.state.input.home(),
            KeyCode::End => self.state.input.end(),

            _ => {}
        }
        false
    }

    /// Send the composed message.
    fn send(&mut self) {
        match self.state.session.begin_send(self.state.input.text()) {
            Ok(SendStart::Ignored) => {}
            Ok(SendStart::Recorded) => {
                self.state.input.clear();
                self.state.follow();
            }
            Ok(SendStart::Pending(pending)) => {
                self.state.input.clear();
                self.state.notice = None;
                self.state.follow();

                let token = pending.token;
                if self.cmd_tx.blocking_send(BackendCommand::Ask(pending)).is_err() {
                    warn!("Backend is gone; answering with fallback");
                    self.state
                        .session
                        .complete_send(token, Err("backend stopped"));
                }
            }
            Err(CoreError::RequestInFlight) => {
                self.state.notice = Some(format!(
                    "{} is still replying - your message is kept",
                    self.state.session.persona().display_name
                ));
            }
            Err(e) => {
                self.state.notice = Some(e.to_string());
            }
        }
    }
}
