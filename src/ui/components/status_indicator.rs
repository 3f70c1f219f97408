//! Status Indicator Component
//!
//! Spinner line shown while a fetch is outstanding.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::Theme;

/// Spinner animation frames
pub const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Spinner glyph for a frame counter; any counter value is valid.
pub fn spinner_frame(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub fn render_spinner_line(message: &str, frame: usize, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} ", spinner_frame(frame)),
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), theme.text()),
    ])
}
