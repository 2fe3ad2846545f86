//! Mock implementations for test fixtures.

pub use folio::adapters::mock::{MockHttpClient, MockResponse, StaticImageSource};
pub use folio::traits::{Headers, HttpClient, HttpError, Response};

use bytes::Bytes;

/// Fluent setup for [`MockHttpClient`] responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Respond to `url` with `status` and a body.
    pub fn with_response(self, url: &str, status: u16, body: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(Response::new(status, Bytes::from(body.to_string()))),
        );
        self
    }

    /// Fail requests to `url` at the transport level.
    pub fn with_transport_error(self, url: &str, message: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Error(HttpError::ConnectionFailed(message.to_string())),
        );
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
