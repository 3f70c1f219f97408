//! Events delivered one at a time to the controller.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

use super::AppMessage;
use crate::ui::layout::Dimensions;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// New terminal size
    Resize(Dimensions),
    /// Animation timer
    Tick,
    /// Result of a command
    Message(AppMessage),
}

impl AppEvent {
    /// Translate a terminal event. Key releases and repeats, focus changes and
    /// pastes are not events for this app.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
            Event::Resize(width, height) => Some(AppEvent::Resize(Dimensions::new(width, height))),
            _ => None,
        }
    }
}

impl From<AppMessage> for AppEvent {
    fn from(message: AppMessage) -> Self {
        AppEvent::Message(message)
    }
}

/// `q` or Ctrl+C.
pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Keys that close the error overlay.
pub fn is_dismiss(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Enter)
}
