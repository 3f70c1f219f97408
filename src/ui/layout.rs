//! Layout engine.
//!
//! Pure functions from the terminal size to the areas each part of the screen
//! occupies. The controller uses [`content_dimensions`] to size sub-views and
//! the renderer uses [`frame_rect`] and [`split_frame`]; both agree on every
//! terminal size.
//!
//! ```text
//! ┌──────── window ────────┐
//! │   ╭──── frame ─────╮   │  10 columns of margin on each side
//! │   │ title          │   │  TITLE_HEIGHT
//! │   │ menu bar       │   │  MENU_BAR_HEIGHT
//! │   │ body           │   │  content dimensions
//! │   ╰────────────────╯   │
//! └────────────────────────┘
//! ```

use ratatui::layout::Rect;

pub const TITLE_HEIGHT: u16 = 1;
pub const MENU_BAR_HEIGHT: u16 = 3;
/// Top + bottom (or left + right) border of the outer frame.
pub const FRAME_BORDER: u16 = 2;
/// Columns left empty around the frame, split evenly between both sides.
pub const HORIZONTAL_MARGIN: u16 = 20;

pub const DETAIL_HEADER_HEIGHT: u16 = 1;
pub const DETAIL_FOOTER_HEIGHT: u16 = 1;
/// Columns the detail text keeps free at the right edge of the viewport.
pub const DETAIL_TEXT_PADDING: u16 = 4;

/// Size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl From<Rect> for Dimensions {
    fn from(rect: Rect) -> Self {
        Self::new(rect.width, rect.height)
    }
}

/// Width of the outer frame. Windows too narrow for the margin get no margin.
pub fn frame_width(window_width: u16) -> u16 {
    if window_width > HORIZONTAL_MARGIN {
        window_width - HORIZONTAL_MARGIN
    } else {
        window_width
    }
}

/// Dimensions handed to sub-views for a given window size.
pub fn content_dimensions(window: Dimensions) -> Dimensions {
    Dimensions {
        width: frame_width(window.width).saturating_sub(FRAME_BORDER),
        height: window
            .height
            .saturating_sub(FRAME_BORDER + TITLE_HEIGHT + MENU_BAR_HEIGHT),
    }
}

/// Scrollable part of the detail view, after its header rule and footer.
pub fn viewport_dimensions(content: Dimensions) -> Dimensions {
    Dimensions {
        width: content.width,
        height: content
            .height
            .saturating_sub(DETAIL_HEADER_HEIGHT + DETAIL_FOOTER_HEIGHT),
    }
}

/// Column count the detail text is wrapped to.
pub fn text_width(viewport_width: u16) -> usize {
    usize::from(viewport_width.saturating_sub(DETAIL_TEXT_PADDING))
}

/// The outer frame, horizontally centered in `area`.
pub fn frame_rect(area: Rect) -> Rect {
    let width = frame_width(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAreas {
    pub title: Rect,
    pub menu: Rect,
    pub body: Rect,
}

/// Stack title, menu bar and body inside the frame's inner area.
///
/// Rows are handed out top to bottom; a short terminal starves the body first.
pub fn split_frame(inner: Rect) -> FrameAreas {
    let mut remaining = inner;
    let mut take = |height: u16| {
        let h = height.min(remaining.height);
        let rect = Rect { height: h, ..remaining };
        remaining.y += h;
        remaining.height -= h;
        rect
    };
    let title = take(TITLE_HEIGHT);
    let menu = take(MENU_BAR_HEIGHT);
    let body = take(u16::MAX);
    FrameAreas { title, menu, body }
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
