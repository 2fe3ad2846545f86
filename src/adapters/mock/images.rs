//! In-memory [`ImageSource`] for carousel tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{FolioResult, NetworkError};
use crate::gallery::ImageSource;

#[derive(Debug, Clone)]
enum Listing {
    Images(Vec<String>),
    Failure(NetworkError),
}

/// Image source with canned listings per folder.
///
/// Folders without a listing return an empty list. An optional delay makes
/// the fetch observable as pending under paused tokio time.
#[derive(Debug, Clone, Default)]
pub struct StaticImageSource {
    listings: Arc<Mutex<HashMap<String, Listing>>>,
    calls: Arc<Mutex<Vec<String>>>,
    delay: Arc<Mutex<Option<Duration>>>,
}

impl StaticImageSource {
    /// Create a source with no listings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_images`](Self::set_images).
    pub fn with_images(self, folder: &str, images: &[&str]) -> Self {
        self.set_images(folder, images);
        self
    }

    /// Serve `images` for `folder`.
    pub fn set_images(&self, folder: &str, images: &[&str]) {
        self.listings.lock().unwrap().insert(
            folder.to_string(),
            Listing::Images(images.iter().map(|s| s.to_string()).collect()),
        );
    }

    /// Fail listings of `folder` with `err`.
    pub fn set_failure(&self, folder: &str, err: NetworkError) {
        self.listings
            .lock()
            .unwrap()
            .insert(folder.to_string(), Listing::Failure(err));
    }

    /// Delay every listing by `delay`.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Folders listed so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageSource for StaticImageSource {
    async fn list_images(&self, folder: &str) -> FolioResult<Vec<String>> {
        self.calls.lock().unwrap().push(folder.to_string());

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let listing = self.listings.lock().unwrap().get(folder).cloned();
        match listing {
            Some(Listing::Images(images)) => Ok(images),
            Some(Listing::Failure(err)) => Err(err.into()),
            None => Ok(Vec::new()),
        }
    }
}
