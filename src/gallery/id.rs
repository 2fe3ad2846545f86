//! Image ids embedded in image URLs.

use std::fmt;
use std::num::NonZeroU64;

use super::GalleryError;

/// Server-side id of a stored image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(NonZeroU64);

impl ImageId {
    /// Wrap a raw id; zero is not a valid id.
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(ImageId)
    }

    /// Raw numeric id.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse the id out of an image URL such as `/api/image/42`.
///
/// The id is the last non-empty path segment; query and fragment are
/// ignored. A bare number is accepted too.
pub fn parse_image_id(url: &str) -> Result<ImageId, GalleryError> {
    let invalid = || GalleryError::InvalidImageUrl {
        url: url.to_string(),
    };

    let path = url.split(['?', '#']).next().unwrap_or_default();
    let segment = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .ok_or_else(invalid)?;

    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    segment
        .parse::<u64>()
        .ok()
        .and_then(ImageId::new)
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relative_url() {
        assert_eq!(parse_image_id("/api/image/42").unwrap().get(), 42);
    }

    #[test]
    fn test_parse_absolute_url_with_query() {
        let id = parse_image_id("http://localhost:8080/api/image/7/?v=2#top").unwrap();
        assert_eq!(id.get(), 7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_parse_bare_number() {
        assert_eq!(parse_image_id("13").unwrap().get(), 13);
    }

    #[test]
    fn test_rejects_non_numeric_and_zero() {
        for url in ["/api/image/abc", "/api/image/0", "/api/image/-3", "", "/", "/api/image/+5"] {
            assert!(parse_image_id(url).is_err(), "{url:?} should not parse");
        }
    }
}
