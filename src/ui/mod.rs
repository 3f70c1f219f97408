//! UI rendering for the viewer.
//!
//! The screen is a single centered frame:
//! - title row
//! - menu bar of tabs, one per [`ViewId`]
//! - body of the active sub-view
//!
//! While the controller is in its error state only the error overlay is drawn,
//! centered on the whole terminal.

pub mod components;
pub mod layout;
pub mod theme;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus, ViewId};
use crate::error::AppError;
use crate::text::wrap;
use crate::views::View;
use components::{render_dialog_frame, render_tab_selector, DialogFrameConfig, TabItem};
use layout::{frame_rect, split_frame};
use theme::Theme;

pub const APP_TITLE: &str = "ANIME TUI";
pub const SEARCH_PLACEHOLDER: &str = "Search is not available yet";
const DISMISS_HINT: &str = "Press Esc or Enter to dismiss";

/// Render the whole screen for the current controller state.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let theme = app.theme;

    if let Some(error) = app.error() {
        render_error_overlay(frame, area, error, &theme);
        return;
    }

    let outer = frame_rect(area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(outer);
    frame.render_widget(block, outer);

    let areas = split_frame(inner);
    render_title(frame, areas.title, &theme);
    render_menu(frame, areas.menu, app.active, app.focus, &theme);

    match app.active {
        ViewId::Rank => app.rank.render(frame, areas.body, &theme),
        ViewId::Detail => app.detail.render(frame, areas.body, &theme),
        ViewId::Search => render_search_placeholder(frame, areas.body, &theme),
    }
}

fn render_title(frame: &mut Frame, area: Rect, theme: &Theme) {
    let title = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        theme.title_style().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_menu(frame: &mut Frame, area: Rect, active: ViewId, focus: Focus, theme: &Theme) {
    let items: Vec<TabItem> = ViewId::ORDER
        .iter()
        .map(|view| TabItem::new(view.label()))
        .collect();
    render_tab_selector(
        frame,
        area,
        &items,
        active.index(),
        focus == Focus::Menu,
        theme,
    );
}

fn render_search_placeholder(frame: &mut Frame, area: Rect, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    let row = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    frame.render_widget(
        Paragraph::new(Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(theme.dim)))
            .alignment(Alignment::Center),
        row,
    );
}

/// Full-screen error overlay: category title, wrapped message, recovery hint.
pub fn render_error_overlay(frame: &mut Frame, area: Rect, error: &AppError, theme: &Theme) {
    let category = error.category();
    let config = DialogFrameConfig::new(category.description(), 0);
    let text_width = usize::from(components::dialog_inner_width(&config, area.width));

    let mut lines: Vec<Line> = wrap(&error.user_message(), text_width)
        .lines()
        .map(|line| Line::from(Span::styled(line.to_string(), theme.text())))
        .collect();
    lines.push(Line::default());
    for hint in wrap(category.recovery_hint(), text_width).lines() {
        lines.push(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(theme.dim),
        )));
    }
    lines.push(Line::from(Span::styled(
        DISMISS_HINT,
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::ITALIC),
    )));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let config = DialogFrameConfig::new(category.description(), height);
    let inner = render_dialog_frame(frame, area, theme, &config);
    frame.render_widget(Paragraph::new(lines), inner);
}
