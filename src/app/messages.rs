//! AppMessage enum for async communication within the application.

use crate::carousel::LoadedImages;

/// Results of background tasks, delivered to the event loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A carousel listing finished for the page with this id
    ImagesLoaded { page_id: u64, loaded: LoadedImages },
    /// The gallery list of a folder finished loading
    GalleryLoaded {
        folder: String,
        result: Result<Vec<String>, String>,
    },
    /// A delete request finished; `Ok` carries the deleted image id
    ImageDeleted {
        url: String,
        result: Result<u64, String>,
    },
}
