//! Unified error type carried by the controller's error state.

use thiserror::Error;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::network::ApiError;
use super::selection::SelectionError;

/// Any failure that can reach the error overlay.
///
/// Cloneable so it can travel inside [`crate::app::AppMessage`] values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Api(_) => ErrorCategory::Network,
            AppError::Selection(_) => ErrorCategory::Selection,
            AppError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Text shown in the body of the error overlay.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
