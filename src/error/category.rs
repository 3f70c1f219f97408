//! Error category classification.

use std::fmt;

/// High-level categorization used by the error overlay and by logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport or remote data source failure.
    Network,
    /// Malformed or missing selection input.
    Selection,
    /// Missing or invalid configuration.
    Configuration,
}

impl ErrorCategory {
    /// Short label suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Selection => "selection",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Title shown on the error overlay.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Request failed",
            ErrorCategory::Selection => "Invalid selection",
            ErrorCategory::Configuration => "Configuration problem",
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => {
                "Check your connection, then reopen the view to try again"
            }
            ErrorCategory::Selection => "Pick another row from the ranking",
            ErrorCategory::Configuration => {
                "Set MAL_CLIENT_ID to your MyAnimeList API client id"
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
