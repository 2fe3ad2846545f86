//! Account and gallery commands.
//!
//! Each handler talks to the API through a [`CliContext`] so tests can swap
//! in a mock HTTP client and a temporary session file.

use std::path::PathBuf;
use std::sync::Arc;

use crate::auth::{Session, SessionClient, SessionStore};
use crate::config::FolioConfig;
use crate::error::{FolioResult, SystemError};
use crate::gallery::{
    format_image_title, parse_image_id, GalleryClient, ImageId, KnownFolder, UploadFile,
    UploadSummary,
};
use crate::traits::HttpClient;

/// What a command needs: API clients and the session file.
#[derive(Clone)]
pub struct CliContext {
    pub gallery: GalleryClient,
    pub sessions: SessionClient,
    pub store: SessionStore,
}

impl CliContext {
    /// Build a context from the configuration.
    pub fn new(config: &FolioConfig, http: Arc<dyn HttpClient>) -> Result<Self, SystemError> {
        let store = match config.session_path() {
            Some(path) => SessionStore::with_path(path),
            None => SessionStore::new()?,
        };
        Ok(Self::with_store(config, http, store))
    }

    pub fn with_store(config: &FolioConfig, http: Arc<dyn HttpClient>, store: SessionStore) -> Self {
        Self {
            gallery: GalleryClient::new(Arc::clone(&http), config.api_url.clone()),
            sessions: SessionClient::new(http, config.api_url.clone()),
            store,
        }
    }

    /// The cached session, required to be an admin.
    fn admin_session(&self) -> FolioResult<Session> {
        let session = self.store.require()?;
        session.require_admin()?;
        Ok(session)
    }
}

/// Log in and cache the session.
pub async fn login(ctx: &CliContext, email: &str, password: &str) -> FolioResult<Session> {
    let session = ctx.sessions.login(email, password).await?;
    ctx.store.save(&session)?;
    Ok(session)
}

/// Forget the cached session.
pub fn logout(ctx: &CliContext) -> FolioResult<()> {
    ctx.store.clear()
}

/// Listing lines for `folder`: `n  Title  url`.
pub async fn list(ctx: &CliContext, folder: &str) -> FolioResult<Vec<String>> {
    let images = ctx.gallery.list_images(folder).await?;
    Ok(images
        .iter()
        .enumerate()
        .map(|(i, url)| {
            format!(
                "{:>3}  {}  {}",
                i + 1,
                format_image_title(url),
                ctx.gallery.resolve(url)
            )
        })
        .collect())
}

/// Upload files into one of the known folders. Admin only.
pub async fn upload(
    ctx: &CliContext,
    folder: &str,
    files: &[PathBuf],
) -> FolioResult<UploadSummary> {
    let folder: KnownFolder = folder.parse()?;
    let session = ctx.admin_session()?;

    let mut uploads = Vec::with_capacity(files.len());
    for path in files {
        uploads.push(UploadFile::read(path).await?);
    }
    ctx.gallery
        .upload_images(folder.as_str(), uploads, &session.token)
        .await
}

/// Delete an image by listing URL or bare id. Admin only.
pub async fn delete(ctx: &CliContext, target: &str) -> FolioResult<ImageId> {
    // A bare id is a URL whose last segment is the id.
    let id = parse_image_id(target)?;
    let session = ctx.admin_session()?;
    ctx.gallery.delete_image(id, &session.token).await?;
    Ok(id)
}
