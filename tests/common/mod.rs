//! Common test utilities for integration tests.
//!
//! Fixtures for sessions, mounted carousels and the test app.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use folio::app::App;
use folio::auth::{Session, User};
use folio::carousel::{CarouselProps, CarouselProvider, CarouselRenderer};
use folio::config::FolioConfig;
use folio::gallery::GalleryClient;

/// Base URL used by every mock client.
pub const API: &str = "http://api.test";

/// A session for `username`; admin when `admin` is set.
pub fn test_session(username: &str, admin: bool) -> Session {
    let created = "2024-01-01T00:00:00Z".parse().unwrap();
    Session {
        token: format!("token-{}", username),
        user: User {
            id: 1,
            email: format!("{}@example.com", username),
            username: username.to_string(),
            is_admin: admin,
            created_at: created,
            updated_at: created,
        },
    }
}

/// A foreground renderer for `folder` under a fresh provider.
pub fn foreground(folder: &str, source: &StaticImageSource) -> (CarouselProvider, CarouselRenderer) {
    let provider = CarouselProvider::new();
    let props = CarouselProps::new(folder).unwrap();
    let renderer = provider.scope(|| CarouselRenderer::new(props, Arc::new(source.clone())));
    (provider, renderer)
}

/// Builder for test [`App`] instances.
pub struct TestAppBuilder {
    config: FolioConfig,
    source: StaticImageSource,
    http: MockHttpClient,
    session: Option<Session>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            config: FolioConfig::default().with_api_url(API),
            source: StaticImageSource::new(),
            http: MockHttpClient::new(),
            session: None,
        }
    }

    pub fn with_images(self, folder: &str, images: &[&str]) -> Self {
        self.source.set_images(folder, images);
        self
    }

    pub fn with_http(mut self, http: MockHttpClient) -> Self {
        self.http = http;
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Build the app. Must run inside a tokio runtime.
    pub fn build(self) -> App {
        let client = GalleryClient::new(Arc::new(self.http), API);
        App::with_source(self.config, client, Arc::new(self.source), self.session).unwrap()
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Feed every queued background message to the app.
pub async fn drain_messages(app: &mut App) {
    let mut rx = app.message_rx.take().expect("receiver already taken");
    // Let spawned tasks run; under paused time this also advances the clock.
    tokio::time::sleep(std::time::Duration::from_millis(1)).await;
    while let Ok(msg) = rx.try_recv() {
        app.handle_message(msg);
    }
    app.message_rx = Some(rx);
}
