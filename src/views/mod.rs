//! Sub-views composed by the controller.
//!
//! Each view owns its own state and reacts to the events the controller
//! forwards. Anything a view wants done asynchronously comes back as a
//! [`Command`]; views never spawn work or talk to the network.

mod detail;
mod detail_content;
mod rank;
mod viewport;

pub use detail::{DetailView, PLACEHOLDER_TEXT};
pub use detail_content::{render_detail, DetailContent, SectionKind};
pub use rank::{FetchStatus, RankView, RANK_COLUMNS};
pub use viewport::Viewport;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

use crate::app::Command;
use crate::ui::layout::Dimensions;
use crate::ui::theme::Theme;

pub trait View {
    fn focus(&mut self);
    fn blur(&mut self);
    fn is_focused(&self) -> bool;

    /// `size` is the content area, not the terminal.
    fn on_resize(&mut self, size: Dimensions) -> Vec<Command>;

    /// Ignored unless the view is focused.
    fn on_key(&mut self, key: KeyEvent) -> Vec<Command>;

    fn on_mouse(&mut self, _mouse: MouseEvent) -> Vec<Command> {
        Vec::new()
    }

    /// Returns true when the view needs a redraw.
    fn on_tick(&mut self) -> bool {
        false
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);
}
