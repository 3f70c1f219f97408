use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::{RankingQuery, CLIENT_ID_HEADER, DETAIL_FIELDS};
use crate::config::Config;
use crate::error::{ApiError, FetchTarget};
use crate::models::{DetailDocument, RankedList};
use crate::traits::{Headers, HttpClient};

/// Client for the ranking and detail endpoints.
///
/// Cheap to clone; each fetch command gets its own copy.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client_id: String,
    http: Arc<dyn HttpClient>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        http: Arc<dyn HttpClient>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: client_id.into(),
            http,
        }
    }

    pub fn from_config(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        Self::new(config.base_url.clone(), config.client_id.clone(), http)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn ranking_url(&self, query: &RankingQuery) -> String {
        let params = query
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/ranking?{}", self.base_url, params)
    }

    pub fn detail_url(&self, id: u64) -> String {
        format!(
            "{}/{}?fields={}",
            self.base_url,
            id,
            urlencoding::encode(DETAIL_FIELDS)
        )
    }

    pub async fn fetch_ranking(&self, query: &RankingQuery) -> Result<RankedList, ApiError> {
        let url = self.ranking_url(query);
        tracing::debug!(ranking_type = %query.ranking_type, offset = ?query.effective_offset(), "fetching ranking");
        self.get_json(&url, FetchTarget::Ranking).await
    }

    pub async fn fetch_detail(&self, id: u64) -> Result<DetailDocument, ApiError> {
        let url = self.detail_url(id);
        tracing::debug!(id, "fetching detail");
        self.get_json(&url, FetchTarget::Detail { id }).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        target: FetchTarget,
    ) -> Result<T, ApiError> {
        let mut headers = Headers::new();
        headers.insert(CLIENT_ID_HEADER.to_string(), self.client_id.clone());

        let response = self
            .http
            .get(url, &headers)
            .await
            .map_err(|source| ApiError::Transport { target, source })?;

        if !response.is_success() {
            return Err(ApiError::status(
                target,
                response.status,
                &response.text_lossy(),
            ));
        }

        response.json::<T>().map_err(|e| ApiError::Decode {
            target,
            message: e.to_string(),
        })
    }
}
