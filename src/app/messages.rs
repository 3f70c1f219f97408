//! AppMessage enum: results and requests delivered back to the controller.

use crate::error::AppError;
use crate::models::{DetailDocument, RankedList};

use super::commands::Ticket;

/// Messages produced by commands, delivered through the app channel.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A ranking page arrived
    RankingLoaded { ticket: Ticket, list: RankedList },
    RankingFailed { ticket: Ticket, error: AppError },
    /// A detail document arrived
    DetailLoaded {
        ticket: Ticket,
        detail: Box<DetailDocument>,
    },
    DetailFailed { ticket: Ticket, error: AppError },
    /// Show the detail view for this item and fetch it
    NavigateToDetail { id: u64 },
    /// Show the rank view
    NavigateToRank,
    /// Any other failure that should reach the error overlay
    Failed(AppError),
}

impl AppMessage {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppMessage::RankingLoaded { .. } => "ranking_loaded",
            AppMessage::RankingFailed { .. } => "ranking_failed",
            AppMessage::DetailLoaded { .. } => "detail_loaded",
            AppMessage::DetailFailed { .. } => "detail_failed",
            AppMessage::NavigateToDetail { .. } => "navigate_to_detail",
            AppMessage::NavigateToRank => "navigate_to_rank",
            AppMessage::Failed(_) => "failed",
        }
    }
}
