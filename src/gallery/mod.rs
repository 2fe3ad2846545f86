//! Portfolio image gallery.
//!
//! Listing, uploading and deleting the images of a folder, plus the types
//! the carousel consumes ([`ImageSet`], [`ImageSource`]).

pub mod client;
pub mod folder;
pub mod id;
pub mod images;

use thiserror::Error;

pub use client::{GalleryClient, UploadFile, UploadSummary, UploadedImage};
pub use folder::KnownFolder;
pub use id::{parse_image_id, ImageId};
pub use images::{format_image_title, ImageSet, ImageSource};

/// Invalid gallery input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The URL does not end in a positive numeric image id.
    #[error("no image id in {url:?}")]
    InvalidImageUrl { url: String },

    /// The folder is not one the site serves.
    #[error("unknown folder {0:?} (expected one of hero, about, carbuild, gallery)")]
    UnknownFolder(String),

    /// An upload was requested with no files.
    #[error("no files to upload")]
    NoFiles,
}
