//! Tab Selector Component
//!
//! The menu bar: one bordered box per tab, laid out left to right. The active
//! tab is bold; while the menu bar holds focus it is also drawn in the accent
//! color.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabItem<'a> {
    pub label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }
}

/// Columns used by one tab: label, one column of padding per side, borders.
pub fn tab_width(item: &TabItem) -> u16 {
    u16::try_from(item.label.width())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
}

pub fn render_tab_selector(
    frame: &mut Frame,
    area: Rect,
    items: &[TabItem],
    selected: usize,
    focused: bool,
    theme: &Theme,
) {
    let mut x = area.x;
    let right = area.x.saturating_add(area.width);

    for (idx, item) in items.iter().enumerate() {
        let width = tab_width(item).min(right.saturating_sub(x));
        if width == 0 {
            break;
        }
        let tab_area = Rect {
            x,
            y: area.y,
            width,
            height: area.height,
        };

        let is_selected = idx == selected;
        let border_color = if is_selected && focused {
            theme.highlight
        } else {
            theme.subtle
        };
        let mut label_style = if is_selected {
            Style::default().fg(theme.normal).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        };
        if is_selected && focused {
            label_style = label_style.fg(theme.highlight);
        }

        let tab = Paragraph::new(format!(" {} ", item.label))
            .style(label_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color)),
            );
        frame.render_widget(tab, tab_area);
        x = x.saturating_add(width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_tab_width() {
        assert_eq!(tab_width(&TabItem::new("Rank")), 8);
        assert_eq!(tab_width(&TabItem::new("")), 4);
    }

    #[test]
    fn test_tabs_render_left_to_right() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let items = [TabItem::new("Rank"), TabItem::new("Detail")];

        terminal
            .draw(|f| {
                render_tab_selector(f, f.area(), &items, 1, true, &Theme::default());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let middle: String = (0..30)
            .map(|x| buffer[(x, 1)].symbol().to_string())
            .collect();
        assert!(middle.starts_with("│ Rank ││ Detail │"));
    }

    #[test]
    fn test_tabs_clip_to_area() {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let items = [TabItem::new("Rank"), TabItem::new("Detail")];

        terminal
            .draw(|f| {
                render_tab_selector(f, f.area(), &items, 0, false, &Theme::default());
            })
            .unwrap();
    }
}
