//! Event and message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};

use super::{is_dismiss, is_quit, App, AppEvent, AppMessage, Command, Focus, Mode, ViewId};
use crate::ui::layout::{content_dimensions, Dimensions};
use crate::views::View;

impl App {
    /// Handle one event from the runtime and return the commands it produced.
    pub fn handle_event(&mut self, event: AppEvent) -> Vec<Command> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
            AppEvent::Resize(window) => self.handle_resize(window),
            AppEvent::Tick => {
                self.tick();
                Vec::new()
            }
            AppEvent::Message(message) => self.handle_message(message),
        }
    }

    /// Advance the animation clock. Only the active view sees ticks.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if !matches!(self.mode, Mode::Normal) {
            return;
        }
        let changed = match self.active {
            ViewId::Rank => self.rank.on_tick(),
            ViewId::Detail => self.detail.on_tick(),
            ViewId::Search => false,
        };
        if changed {
            self.mark_dirty();
        }
    }

    /// Every sub-view gets the content size exactly once per resize,
    /// including while the error overlay is up.
    pub fn handle_resize(&mut self, window: Dimensions) -> Vec<Command> {
        self.window = window;
        self.content = content_dimensions(window);
        tracing::debug!(
            width = window.width,
            height = window.height,
            content_width = self.content.width,
            content_height = self.content.height,
            "resize"
        );
        self.mark_dirty();

        let mut commands = self.rank.on_resize(self.content);
        commands.extend(self.detail.on_resize(self.content));
        commands
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if is_quit(&key) {
            tracing::info!("quit requested");
            self.should_quit = true;
            return Vec::new();
        }

        if self.error().is_some() {
            if is_dismiss(&key) {
                self.dismiss_error();
            }
            return Vec::new();
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => return self.cycle_view(false),
            KeyCode::Right | KeyCode::Char('l') => return self.cycle_view(true),
            KeyCode::Esc => {
                self.focus_menu();
                return Vec::new();
            }
            _ => {}
        }

        if self.focus == Focus::Menu {
            if matches!(
                key.code,
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Enter
            ) {
                self.focus_content();
            }
            return Vec::new();
        }

        self.sync_focus();
        let commands = match self.active {
            ViewId::Rank => self.rank.on_key(key),
            ViewId::Detail => self.detail.on_key(key),
            ViewId::Search => Vec::new(),
        };
        self.mark_dirty();
        commands
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<Command> {
        if !matches!(self.mode, Mode::Normal) {
            return Vec::new();
        }
        let commands = match self.active {
            ViewId::Rank => self.rank.on_mouse(mouse),
            ViewId::Detail => self.detail.on_mouse(mouse),
            ViewId::Search => Vec::new(),
        };
        self.mark_dirty();
        commands
    }

    /// Handle a command result or a cross-view request.
    ///
    /// Results are applied in every mode so a view is up to date once the
    /// overlay is dismissed.
    pub fn handle_message(&mut self, message: AppMessage) -> Vec<Command> {
        tracing::debug!(kind = message.kind(), "message");
        self.mark_dirty();

        match message {
            AppMessage::RankingLoaded { ticket, list } => {
                let count = list.data.len();
                if self.rank.on_data(ticket, list) {
                    tracing::info!(count, ticket = ticket.0, "ranking loaded");
                }
                Vec::new()
            }
            AppMessage::RankingFailed { ticket, error } => {
                if self.rank.on_failed(ticket) {
                    self.show_error(error);
                } else {
                    tracing::debug!(ticket = ticket.0, error = %error, "dropping stale ranking failure");
                }
                Vec::new()
            }
            AppMessage::DetailLoaded { ticket, detail } => {
                let id = detail.id;
                if self.detail.on_data(ticket, *detail) {
                    tracing::info!(id, ticket = ticket.0, "detail loaded");
                }
                Vec::new()
            }
            AppMessage::DetailFailed { ticket, error } => {
                if self.detail.on_failed(ticket) {
                    self.show_error(error);
                } else {
                    tracing::debug!(ticket = ticket.0, error = %error, "dropping stale detail failure");
                }
                Vec::new()
            }
            AppMessage::NavigateToDetail { id } => {
                tracing::info!(id, "navigate to detail");
                self.active = ViewId::Detail;
                self.focus = Focus::Content;
                self.sync_focus();
                self.detail.on_navigate(id)
            }
            AppMessage::NavigateToRank => {
                tracing::info!("navigate to rank");
                self.active = ViewId::Rank;
                self.focus = Focus::Content;
                self.sync_focus();
                self.rank.on_enter()
            }
            AppMessage::Failed(error) => {
                self.show_error(error);
                Vec::new()
            }
        }
    }
}
