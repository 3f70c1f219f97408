//! Controller for the TUI.
//!
//! [`App`] owns the sub-views and decides which one sees each event:
//! - [`ViewId`] - which tab is active
//! - [`Focus`] - whether keys go to the menu bar or the active view
//! - [`Mode`] - normal routing, or the error overlay
//! - [`AppEvent`] / [`AppMessage`] - what the runtime delivers
//! - [`Command`] - async work handed back to the runtime
//!
//! Event handling never blocks; fetches are returned as commands and their
//! results arrive later as [`AppMessage`]s.

mod commands;
mod events;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use commands::{spawn_commands, Command, Ticket};
pub use events::{is_dismiss, is_quit, AppEvent};
pub use messages::AppMessage;
pub use types::{Focus, Mode, ViewId};

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::AppError;
use crate::ui::layout::Dimensions;
use crate::ui::theme::Theme;
use crate::views::{DetailView, RankView};

pub struct App {
    pub mode: Mode,
    /// Tab shown in the body
    pub active: ViewId,
    pub focus: Focus,
    pub rank: RankView,
    pub detail: DetailView,
    pub theme: Theme,
    /// Terminal size from the last resize
    pub window: Dimensions,
    /// Size handed to the sub-views
    pub content: Dimensions,
    pub should_quit: bool,
    /// Dirty flag: set on state changes, cleared after each draw.
    pub needs_redraw: bool,
    pub tick_count: u64,
    /// Receiver for command results (taken by the runtime loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for command results (cloned into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    api: ApiClient,
}

impl App {
    pub fn new(config: &Config, api: ApiClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let theme = Theme::default();

        Self {
            mode: Mode::Normal,
            active: ViewId::Rank,
            focus: Focus::Menu,
            rank: RankView::new(config.ranking_type, config.page_size),
            detail: DetailView::new(theme),
            theme,
            window: Dimensions::default(),
            content: Dimensions::default(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            api,
        }
    }

    /// Commands to run at startup.
    pub fn init(&mut self) -> Vec<Command> {
        self.rank.init()
    }

    /// Hand commands to the runtime.
    pub fn dispatch(&self, commands: Vec<Command>) {
        if !commands.is_empty() {
            tracing::debug!(count = commands.len(), "dispatching commands");
            spawn_commands(commands, &self.api, &self.message_tx);
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn error(&self) -> Option<&AppError> {
        match &self.mode {
            Mode::Error(err) => Some(err),
            Mode::Normal => None,
        }
    }

    pub fn show_error(&mut self, error: AppError) {
        tracing::warn!(category = %error.category(), error = %error, "entering error state");
        self.mode = Mode::Error(error);
        self.mark_dirty();
    }

    pub fn dismiss_error(&mut self) {
        if self.error().is_some() {
            tracing::info!(active = ?self.active, "error dismissed");
            self.mode = Mode::Normal;
            self.mark_dirty();
        }
    }
}
