//! Dialog Frame Component
//!
//! A centered dialog with rounded borders. Clears whatever was drawn beneath.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 70,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// 60% of the area, kept within the configured bounds and the area itself.
pub(crate) fn dialog_width(config: &DialogFrameConfig, area_width: u16) -> u16 {
    let preferred = (u32::from(area_width) * 60 / 100) as u16;
    preferred
        .clamp(config.min_width, config.max_width.max(config.min_width))
        .min(area_width)
}

/// Columns available for text inside the dialog borders.
pub fn dialog_inner_width(config: &DialogFrameConfig, area_width: u16) -> u16 {
    dialog_width(config, area_width).saturating_sub(2)
}

/// Render a dialog frame and return the inner content area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    config: &DialogFrameConfig,
) -> Rect {
    let width = dialog_width(config, area.width);
    let height = config.content_height.saturating_add(2);
    let dialog_area = centered_rect(area, width, height);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.error))
        .style(Style::default().bg(theme.dialog_bg));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_frame_config_builder() {
        let config = DialogFrameConfig::new("Error", 4).min_width(20).max_width(50);
        assert_eq!(config.title, "Error");
        assert_eq!(config.content_height, 4);
        assert_eq!(config.min_width, 20);
        assert_eq!(config.max_width, 50);
    }

    #[test]
    fn test_dialog_width_bounds() {
        let config = DialogFrameConfig::new("Error", 4);
        assert_eq!(dialog_width(&config, 100), 60);
        assert_eq!(dialog_width(&config, 200), 70);
        assert_eq!(dialog_width(&config, 40), 30);
        assert_eq!(dialog_width(&config, 20), 20);
        assert_eq!(dialog_inner_width(&config, 100), 58);
    }
}
