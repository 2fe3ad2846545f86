//! Client for the gallery endpoints of the portfolio API.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::id::{parse_image_id, ImageId};
use super::images::ImageSource;
use super::GalleryError;
use crate::error::{classify_io_error, FolioResult, NetworkError};
use crate::traits::{bearer_headers, FilePart, Headers, HttpClient, MultipartForm, Response};

/// Form field carrying the target folder of an upload.
const FOLDER_FIELD: &str = "folder";
/// Form field carrying each uploaded file.
const IMAGES_FIELD: &str = "images";

/// A file ready to be uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    /// Name reported to the server
    pub file_name: String,
    /// MIME type, guessed from the extension
    pub content_type: String,
    /// File contents
    pub data: Bytes,
}

impl UploadFile {
    /// Build an upload from in-memory data.
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            data: data.into(),
        }
    }

    /// Read a file from disk.
    pub async fn read(path: &Path) -> FolioResult<Self> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| classify_io_error(e, Some(path.to_path_buf()), "read"))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(file_name, data))
    }

    fn into_part(self) -> FilePart {
        FilePart {
            field: IMAGES_FIELD.to_string(),
            file_name: self.file_name,
            content_type: self.content_type,
            data: self.data,
        }
    }
}

/// MIME type for an image file name. Unknown extensions are sent as JPEG,
/// which is what the server assumes for untyped parts anyway.
fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "image/jpeg",
    }
}

/// One image stored by an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub id: u64,
    pub filename: String,
    pub folder: String,
    pub url: String,
}

/// Response of `POST /api/gallery/upload`.
///
/// The server skips files it could not store, so `uploaded` may be lower
/// than the number of files sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSummary {
    pub uploaded: usize,
    #[serde(default)]
    pub images: Vec<UploadedImage>,
}

/// Gallery API client.
#[derive(Clone)]
pub struct GalleryClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl std::fmt::Debug for GalleryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GalleryClient {
    /// Create a client for the API at `base_url`.
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn images_url(&self, folder: &str) -> String {
        format!(
            "{}/api/images?folder={}",
            self.base_url,
            urlencoding::encode(folder)
        )
    }

    /// Absolute URL for an image reference as returned by the listing.
    pub fn resolve(&self, image: &str) -> String {
        if image.starts_with("http://") || image.starts_with("https://") {
            image.to_string()
        } else {
            format!("{}/{}", self.base_url, image.trim_start_matches('/'))
        }
    }

    /// Ordered image URLs of `folder`.
    pub async fn list_images(&self, folder: &str) -> FolioResult<Vec<String>> {
        let url = self.images_url(folder);
        tracing::debug!(folder, "listing images");

        let response = self
            .http
            .get(&url, &Headers::new())
            .await
            .map_err(|e| NetworkError::from_http(e, &url, "image listing"))?;
        let response = check_status(response)?;

        // `null` and objects are as wrong as a syntax error here.
        let images: Option<Vec<String>> =
            response.json().map_err(|e| NetworkError::InvalidResponse {
                message: format!("expected an array of image URLs: {}", e),
            })?;
        let images = images.ok_or_else(|| NetworkError::InvalidResponse {
            message: "expected an array of image URLs, got null".to_string(),
        })?;

        tracing::debug!(folder, count = images.len(), "listed images");
        Ok(images)
    }

    /// Upload `files` into `folder`.
    pub async fn upload_images(
        &self,
        folder: &str,
        files: Vec<UploadFile>,
        token: &str,
    ) -> FolioResult<UploadSummary> {
        if files.is_empty() {
            return Err(GalleryError::NoFiles.into());
        }
        let url = format!("{}/api/gallery/upload", self.base_url);
        let count = files.len();

        let form = files
            .into_iter()
            .fold(MultipartForm::new().text(FOLDER_FIELD, folder), |form, file| {
                form.file(file.into_part())
            });

        tracing::info!(folder, files = count, "uploading images");
        let response = self
            .http
            .post_multipart(&url, form, &bearer_headers(token))
            .await
            .map_err(|e| NetworkError::from_http(e, &url, "upload"))?;
        let summary: UploadSummary = check_status(response)?.json()?;

        if summary.uploaded < count {
            tracing::warn!(
                folder,
                sent = count,
                stored = summary.uploaded,
                "server skipped some files"
            );
        }
        Ok(summary)
    }

    /// Delete the image with `id`.
    pub async fn delete_image(&self, id: ImageId, token: &str) -> FolioResult<()> {
        let url = format!("{}/api/gallery/{}", self.base_url, id);
        tracing::info!(id = id.get(), "deleting image");

        let response = self
            .http
            .delete(&url, &bearer_headers(token))
            .await
            .map_err(|e| NetworkError::from_http(e, &url, "delete"))?;
        check_status(response)?;
        Ok(())
    }

    /// Delete the image a listing URL points at.
    pub async fn delete_image_by_url(&self, image_url: &str, token: &str) -> FolioResult<ImageId> {
        let id = parse_image_id(image_url)?;
        self.delete_image(id, token).await?;
        Ok(id)
    }
}

#[async_trait]
impl ImageSource for GalleryClient {
    async fn list_images(&self, folder: &str) -> FolioResult<Vec<String>> {
        GalleryClient::list_images(self, folder).await
    }
}

/// Turn a non-2xx response into [`NetworkError::HttpStatus`].
fn check_status(response: Response) -> Result<Response, NetworkError> {
    if response.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .map(|text| text.trim().to_string())
        .unwrap_or_default();
    Err(NetworkError::HttpStatus {
        status: response.status,
        message,
    })
}
