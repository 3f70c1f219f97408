//! Reusable UI components.
//!
//! - `TabSelector` - the menu bar of bordered tabs
//! - `StatusIndicator` - spinner line shown while data loads
//! - `DialogFrame` - centered overlay with rounded borders

mod dialog_frame;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{dialog_inner_width, render_dialog_frame, DialogFrameConfig};
pub use status_indicator::{render_spinner_line, spinner_frame, SPINNER_FRAMES};
pub use tab_selector::{render_tab_selector, tab_width, TabItem};
