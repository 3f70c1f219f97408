//! Color palette.
//!
//! Render functions take a [`Theme`] explicitly; [`Theme::default`] is the
//! dark palette built from the constants below.

use ratatui::style::{Color, Modifier, Style};

/// Body text.
pub const COLOR_NORMAL: Color = Color::Rgb(0xEE, 0xEE, 0xEE);

/// Separators, footers, inactive tabs.
pub const COLOR_SUBTLE: Color = Color::Rgb(0x38, 0x38, 0x38);

/// Accent used for the title, tabs and spinner.
pub const COLOR_HIGHLIGHT: Color = Color::Rgb(0x7D, 0x56, 0xF4);

pub const COLOR_TITLE: Color = Color::Rgb(0x87, 0x4B, 0xFD);

/// Outer frame border.
pub const COLOR_BORDER: Color = Color::Indexed(240);

pub const COLOR_DIM: Color = Color::DarkGray;

pub const COLOR_SELECTED_FG: Color = Color::Indexed(229);
pub const COLOR_SELECTED_BG: Color = Color::Indexed(57);

pub const COLOR_ERROR: Color = Color::Red;

/// Background for the error dialog.
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub normal: Color,
    pub subtle: Color,
    pub highlight: Color,
    pub title: Color,
    pub border: Color,
    pub dim: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub error: Color,
    pub dialog_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            normal: COLOR_NORMAL,
            subtle: COLOR_SUBTLE,
            highlight: COLOR_HIGHLIGHT,
            title: COLOR_TITLE,
            border: COLOR_BORDER,
            dim: COLOR_DIM,
            selected_fg: COLOR_SELECTED_FG,
            selected_bg: COLOR_SELECTED_BG,
            error: COLOR_ERROR,
            dialog_bg: COLOR_DIALOG_BG,
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.normal)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn selected_row(&self) -> Style {
        Style::default().fg(self.selected_fg).bg(self.selected_bg)
    }

    pub fn rule(&self) -> Style {
        Style::default().fg(self.subtle)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }
}
