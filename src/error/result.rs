//! Result type alias for folio operations.

use super::folio_error::FolioError;

/// Type alias for Results using FolioError.
///
/// ```ignore
/// use folio::error::FolioResult;
///
/// fn list(folder: &str) -> FolioResult<Vec<String>> {
///     Ok(Vec::new())
/// }
/// ```
pub type FolioResult<T> = Result<T, FolioError>;
