//! Commands: async work requested by the controller or a view.
//!
//! Views never run commands themselves. They return them to the controller,
//! which hands the batch to [`spawn_commands`]. Results come back later as
//! [`AppMessage`]s on the app channel, in completion order.

use tokio::sync::mpsc::UnboundedSender;

use crate::api::{ApiClient, RankingQuery};

use super::AppMessage;

/// Tag attached to a fetch so a late result can be told apart from the
/// current one. Each view keeps its own sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Ticket(pub u64);

impl Ticket {
    pub fn next(self) -> Self {
        Ticket(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone)]
pub enum Command {
    FetchRanking { query: RankingQuery, ticket: Ticket },
    FetchDetail { id: u64, ticket: Ticket },
    /// Deliver a message without doing any I/O.
    Emit(AppMessage),
}

impl Command {
    pub fn emit(message: AppMessage) -> Self {
        Command::Emit(message)
    }
}

/// Run a batch of commands off the event loop.
///
/// Fetches are spawned on the tokio runtime; emitted messages are queued
/// immediately. A closed channel means the app is shutting down, so send
/// failures are ignored.
pub fn spawn_commands(commands: Vec<Command>, api: &ApiClient, tx: &UnboundedSender<AppMessage>) {
    for command in commands {
        match command {
            Command::FetchRanking { query, ticket } => {
                let api = api.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let message = match api.fetch_ranking(&query).await {
                        Ok(list) => AppMessage::RankingLoaded { ticket, list },
                        Err(e) => AppMessage::RankingFailed {
                            ticket,
                            error: e.into(),
                        },
                    };
                    let _ = tx.send(message);
                });
            }
            Command::FetchDetail { id, ticket } => {
                let api = api.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let message = match api.fetch_detail(id).await {
                        Ok(detail) => AppMessage::DetailLoaded {
                            ticket,
                            detail: Box::new(detail),
                        },
                        Err(e) => AppMessage::DetailFailed {
                            ticket,
                            error: e.into(),
                        },
                    };
                    let _ = tx.send(message);
                });
            }
            Command::Emit(message) => {
                let _ = tx.send(message);
            }
        }
    }
}
