//! Runtime configuration loaded from the process environment.
//!
//! ```ignore
//! use anitui::config::Config;
//!
//! let config = Config::new("client-id")
//!     .with_base_url("http://localhost:8080/v2/anime")
//!     .with_page_size(25);
//! ```

use crate::api::{RankingType, DEFAULT_BASE_URL, DEFAULT_LIMIT};
use crate::error::ConfigError;

pub const CLIENT_ID_VAR: &str = "MAL_CLIENT_ID";
/// Older name, still honored when [`CLIENT_ID_VAR`] is unset.
pub const LEGACY_CLIENT_ID_VAR: &str = "CLIENT_ID";
pub const API_URL_VAR: &str = "ANITUI_API_URL";
pub const RANKING_TYPE_VAR: &str = "ANITUI_RANKING_TYPE";
pub const PAGE_SIZE_VAR: &str = "ANITUI_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub client_id: String,
    /// No trailing slash.
    pub base_url: String,
    /// Ranking shown when the viewer starts.
    pub ranking_type: RankingType,
    /// Rows per ranking page.
    pub page_size: i64,
}

impl Config {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            ranking_type: RankingType::default(),
            page_size: DEFAULT_LIMIT,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_ranking_type(mut self, ranking_type: RankingType) -> Self {
        self.ranking_type = ranking_type;
        self
    }

    /// Non-positive sizes fall back to the default page size.
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = if page_size > 0 {
            page_size
        } else {
            DEFAULT_LIMIT
        };
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let client_id = non_empty(CLIENT_ID_VAR)
            .or_else(|| non_empty(LEGACY_CLIENT_ID_VAR))
            .ok_or(ConfigError::MissingClientId { var: CLIENT_ID_VAR })?;

        let mut config = Self::new(client_id);

        if let Some(url) = non_empty(API_URL_VAR) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidBaseUrl { url });
            }
            config = config.with_base_url(url);
        }

        if let Some(value) = non_empty(RANKING_TYPE_VAR) {
            config = config.with_ranking_type(RankingType::parse_or_default(&value));
        }

        if let Some(value) = non_empty(PAGE_SIZE_VAR) {
            config = config.with_page_size(value.parse().unwrap_or(DEFAULT_LIMIT));
        }

        Ok(config)
    }
}
