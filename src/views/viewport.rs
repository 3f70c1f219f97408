//! Scrollable line buffer used by the detail view.

use ratatui::text::Line;

use crate::ui::layout::Dimensions;

/// A window of `height` lines onto `lines`, starting at `offset`.
///
/// `offset` is always within `0..=max_offset()`.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    lines: Vec<Line<'static>>,
    ready: bool,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the first size has been received.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Apply a size. Scroll position survives, clamped to the new limits.
    pub fn resize(&mut self, size: Dimensions) {
        self.width = size.width;
        self.height = size.height;
        self.ready = true;
        self.clamp();
    }

    /// Replace the content, keeping the scroll position where possible.
    pub fn set_content(&mut self, lines: Vec<Line<'static>>) {
        self.lines = lines;
        self.clamp();
    }

    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(usize::from(self.height))
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    /// Move the window; returns true when the offset changed.
    pub fn set_offset(&mut self, offset: usize) -> bool {
        let old = self.offset;
        self.offset = offset.min(self.max_offset());
        old != self.offset
    }

    pub fn scroll_down(&mut self, lines: usize) -> bool {
        self.set_offset(self.offset.saturating_add(lines))
    }

    pub fn scroll_up(&mut self, lines: usize) -> bool {
        self.set_offset(self.offset.saturating_sub(lines))
    }

    pub fn page_down(&mut self) -> bool {
        self.scroll_down(usize::from(self.height.max(1)))
    }

    pub fn page_up(&mut self) -> bool {
        self.scroll_up(usize::from(self.height.max(1)))
    }

    pub fn half_page_down(&mut self) -> bool {
        self.scroll_down(usize::from((self.height / 2).max(1)))
    }

    pub fn half_page_up(&mut self) -> bool {
        self.scroll_up(usize::from((self.height / 2).max(1)))
    }

    pub fn goto_top(&mut self) -> bool {
        self.set_offset(0)
    }

    pub fn goto_bottom(&mut self) -> bool {
        self.set_offset(self.max_offset())
    }

    /// Fraction of the scrollable range already passed, in `0.0..=1.0`.
    ///
    /// Content that fits entirely counts as fully scrolled.
    pub fn scroll_percent(&self) -> f64 {
        let height = usize::from(self.height);
        let total = self.lines.len();
        if height >= total {
            return 1.0;
        }
        let percent = self.offset as f64 / (total - height) as f64;
        percent.clamp(0.0, 1.0)
    }

    pub fn visible_lines(&self) -> &[Line<'static>] {
        let end = (self.offset + usize::from(self.height)).min(self.lines.len());
        &self.lines[self.offset.min(end)..end]
    }
}
