//! Errors produced by the data fetch commands.
//!
//! Every variant remembers which fetch failed so the overlay can say
//! "failed to fetch detail for item 42" instead of a bare transport message.

use std::fmt;

use thiserror::Error;

use crate::traits::HttpError;

/// Which remote call a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    Ranking,
    Detail { id: u64 },
}

impl fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchTarget::Ranking => f.write_str("failed to fetch ranking"),
            FetchTarget::Detail { id } => write!(f, "failed to fetch detail for item {id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{target}: {source}")]
    Transport {
        target: FetchTarget,
        #[source]
        source: HttpError,
    },

    /// The server answered with a non-2xx status.
    #[error("{target}: server returned HTTP {status}: {message}")]
    Status {
        target: FetchTarget,
        status: u16,
        message: String,
    },

    /// The body did not match the expected document shape.
    #[error("{target}: invalid response: {message}")]
    Decode { target: FetchTarget, message: String },
}

impl ApiError {
    pub fn target(&self) -> FetchTarget {
        match self {
            ApiError::Transport { target, .. }
            | ApiError::Status { target, .. }
            | ApiError::Decode { target, .. } => *target,
        }
    }

    /// Status bodies can be whole HTML pages; keep the overlay readable.
    pub(crate) fn status(target: FetchTarget, status: u16, body: &str) -> Self {
        const MAX_BODY_CHARS: usize = 200;
        let message = body.trim().chars().take(MAX_BODY_CHARS).collect();
        ApiError::Status {
            target,
            status,
            message,
        }
    }
}
