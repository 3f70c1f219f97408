//! Navigation methods for the App.

use super::{App, Command, Focus, ViewId};
use crate::views::View;

impl App {
    /// Move the active tab one step in `ViewId::ORDER`, wrapping at both ends.
    pub fn cycle_view(&mut self, forward: bool) -> Vec<Command> {
        let target = if forward {
            self.active.next()
        } else {
            self.active.prev()
        };
        self.activate(target)
    }

    /// Make `view` the active tab. Entering Rank retries a failed fetch.
    pub fn activate(&mut self, view: ViewId) -> Vec<Command> {
        tracing::debug!(from = ?self.active, to = ?view, "switching view");
        self.active = view;
        if view == ViewId::Search {
            self.focus = Focus::Menu;
        }
        self.sync_focus();
        self.mark_dirty();

        match view {
            ViewId::Rank => self.rank.on_enter(),
            ViewId::Detail | ViewId::Search => Vec::new(),
        }
    }

    pub fn focus_menu(&mut self) {
        self.focus = Focus::Menu;
        self.sync_focus();
        self.mark_dirty();
    }

    /// Hand key input to the active view. The Search tab has no view.
    pub fn focus_content(&mut self) {
        if self.active == ViewId::Search {
            return;
        }
        self.focus = Focus::Content;
        self.sync_focus();
        self.mark_dirty();
    }

    /// Apply `focus` and `active` to the sub-views so at most one of them
    /// (or neither, when the menu has focus) accepts keys.
    pub fn sync_focus(&mut self) {
        let content = self.focus == Focus::Content;
        if content && self.active == ViewId::Rank {
            self.rank.focus();
        } else {
            self.rank.blur();
        }
        if content && self.active == ViewId::Detail {
            self.detail.focus();
        } else {
            self.detail.blur();
        }
    }
}
