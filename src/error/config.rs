//! Configuration errors, raised before the terminal is taken over.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing API client id: set {var}")]
    MissingClientId { var: &'static str },

    #[error("invalid API base URL [{url}]: must start with http:// or https://")]
    InvalidBaseUrl { url: String },
}
