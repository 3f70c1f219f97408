//! Common test utilities for integration tests.
//!
//! Fixture documents shaped like the remote API, plus builders for an
//! [`App`] wired to a mock HTTP client.
//!
//! # Example
//!
//! ```ignore
//! use common::{TestAppBuilder, ranking_json};
//!
//! let (app, http) = TestAppBuilder::new()
//!     .with_ranking(&ranking_json(&[(1, 42, "Example", "")]))
//!     .build();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use anitui::api::ApiClient;
use anitui::app::{App, AppEvent, AppMessage, Command};
use anitui::config::Config;
use anitui::ui::layout::Dimensions;

pub const TEST_BASE_URL: &str = "https://api.test/v2/anime";
pub const TEST_CLIENT_ID: &str = "test-client-id";

/// A ranking response body. Each item is `(rank, id, title, english_title)`.
pub fn ranking_json(items: &[(u32, u64, &str, &str)]) -> String {
    let data: Vec<serde_json::Value> = items
        .iter()
        .map(|(rank, id, title, en)| {
            serde_json::json!({
                "node": {
                    "id": id,
                    "title": title,
                    "main_picture": {"medium": format!("https://cdn.test/{id}.jpg")},
                    "alternative_titles": {"en": en, "ja": format!("{title} (ja)")}
                },
                "ranking": {"rank": rank}
            })
        })
        .collect();
    serde_json::json!({ "data": data, "paging": {} }).to_string()
}

/// A detail response body with every section populated.
pub fn detail_json(id: u64, title: &str) -> String {
    serde_json::json!({
        "id": id,
        "title": title,
        "alternative_titles": {"en": "", "ja": "テスト"},
        "start_date": "2020-04-01",
        "synopsis": "A short synopsis.",
        "rank": 3,
        "popularity": 10,
        "status": "finished_airing",
        "genres": [{"id": 1, "name": "Action"}, {"id": 2, "name": "Drama"}],
        "rating": "pg_13",
        "background": "Some background.",
        "related_anime": [
            {"node": {"id": 7, "title": "Sequel"}, "relation_type_formatted": "Sequel"}
        ],
        "recommendations": [{"node": {"id": 8, "title": "Similar"}, "num_recommendations": 4}],
        "studios": [{"id": 1, "name": "Studio A"}, {"id": 2, "name": "Studio B"}]
    })
    .to_string()
}

pub fn test_config() -> Config {
    Config::new(TEST_CLIENT_ID).with_base_url(TEST_BASE_URL)
}

/// Builder for an [`App`] backed by a [`MockHttpClient`].
#[derive(Default)]
pub struct TestAppBuilder {
    http: MockHttpConfig,
    size: Option<Dimensions>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every ranking request with `body`.
    pub fn with_ranking(mut self, body: &str) -> Self {
        self.http = self
            .http
            .with_json_response(&format!("{TEST_BASE_URL}/ranking"), 200, body);
        self
    }

    /// Answer the detail request for `id` with `body`.
    pub fn with_detail(mut self, id: u64, body: &str) -> Self {
        self.http = self
            .http
            .with_json_response(&format!("{TEST_BASE_URL}/{id}?"), 200, body);
        self
    }

    pub fn with_status(mut self, url_prefix: &str, status: u16, body: &str) -> Self {
        self.http = self.http.with_json_response(url_prefix, status, body);
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.size = Some(Dimensions::new(width, height));
        self
    }

    pub fn build(self) -> (App, MockHttpClient) {
        let http = self.http.build();
        let config = test_config();
        let api = ApiClient::from_config(&config, Arc::new(http.clone()));
        let mut app = App::new(&config, api);
        let size = self.size.unwrap_or(Dimensions::new(100, 30));
        app.handle_event(AppEvent::Resize(size));
        (app, http)
    }
}

/// Default test app with a 100x30 window and no mock responses.
pub fn test_app() -> App {
    TestAppBuilder::new().build().0
}

/// Dispatch `commands` and feed results back until nothing is pending.
///
/// Stops after `max_messages` deliveries so a broken loop fails the test
/// instead of hanging it.
pub async fn run_commands(app: &mut App, commands: Vec<Command>, max_messages: usize) -> Vec<String> {
    let mut rx = app
        .message_rx
        .take()
        .expect("message receiver already taken");
    let mut outstanding = commands.len();
    app.dispatch(commands);

    let mut kinds = Vec::new();
    while outstanding > 0 && kinds.len() < max_messages {
        let message: AppMessage = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for a command result")
            .expect("message channel closed");
        outstanding -= 1;
        kinds.push(message.kind().to_string());

        let follow_up = app.handle_event(AppEvent::Message(message));
        outstanding += follow_up.len();
        app.dispatch(follow_up);
    }

    app.message_rx = Some(rx);
    kinds
}
