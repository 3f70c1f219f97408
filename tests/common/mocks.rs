//! Mock implementations for test fixtures.
//!
//! Re-exports the mock HTTP client from `anitui::adapters::mock` and adds a
//! small builder for canned responses.

pub use anitui::adapters::mock::http::MockResponse;
pub use anitui::adapters::mock::{MockHttpClient, RecordedRequest};
pub use anitui::traits::{HttpError, Response};

/// Configuration for setting up mock HTTP responses.
#[derive(Default)]
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures a JSON response for a URL or URL prefix.
    pub fn with_json_response(self, url: &str, status: u16, json: &str) -> Self {
        self.client.set_json(url, status, json);
        self
    }

    /// Configures a transport failure for a URL or URL prefix.
    #[allow(dead_code)]
    pub fn with_connection_failure(self, url: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string())),
        );
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}
