//! Type definitions for the controller state.

use crate::error::AppError;

/// Sub-views in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ViewId {
    #[default]
    Rank,
    Detail,
    /// Reserved; has a tab and a placeholder body but receives no events.
    Search,
}

impl ViewId {
    pub const ORDER: [ViewId; 3] = [ViewId::Rank, ViewId::Detail, ViewId::Search];

    pub fn label(&self) -> &'static str {
        match self {
            ViewId::Rank => "Rank",
            ViewId::Detail => "Detail",
            ViewId::Search => "Search",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ViewId::Rank => 0,
            ViewId::Detail => 1,
            ViewId::Search => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Menu,
    /// The sub-view matching the active tab.
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Error overlay is up; only dismiss and quit keys are handled.
    Error(AppError),
}
