//! Image sets and the source that lists them.

use async_trait::async_trait;

use crate::error::FolioResult;

/// Ordered image references of one folder.
///
/// Immutable once fetched; a folder change replaces the whole set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSet {
    folder: String,
    images: Vec<String>,
}

impl ImageSet {
    /// A set with the given images, in display order.
    pub fn new(folder: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            folder: folder.into(),
            images,
        }
    }

    /// An empty set for `folder`.
    pub fn empty(folder: impl Into<String>) -> Self {
        Self::new(folder, Vec::new())
    }

    /// Folder the set belongs to.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// True when there is nothing to display.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image at `position`.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.images.get(position).map(String::as_str)
    }

    /// Images in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }

    /// Images as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.images
    }
}

/// Something that can list the images of a folder.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Ordered image URLs of `folder`.
    async fn list_images(&self, folder: &str) -> FolioResult<Vec<String>>;
}

/// Readable title from an image path: `/images/car/front-left_wheel.jpg`
/// becomes `Front Left Wheel`.
pub fn format_image_title(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or_default();
    let stem = match file_name.rsplit_once('.') {
        Some((stem, ext))
            if matches!(
                ext.to_ascii_lowercase().as_str(),
                "jpg" | "jpeg" | "png" | "webp" | "gif"
            ) =>
        {
            stem
        }
        _ => file_name,
    };

    stem.split(|c| c == '-' || c == '_' || c == ' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
