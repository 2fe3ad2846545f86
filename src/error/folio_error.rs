//! Unified error type for folio.

use std::fmt;

use super::auth::AuthError;
use super::category::ErrorCategory;
use super::network::NetworkError;
use super::system::{classify_io_error, SystemError};
use crate::carousel::CarouselError;
use crate::config::ConfigError;
use crate::gallery::GalleryError;

/// Unified error type for folio.
///
/// Leaf errors from every module convert into `FolioError` with `?`, which
/// gives the CLI and the TUI one place to ask for a category, a user message
/// and a log code.
#[derive(Debug)]
pub enum FolioError {
    /// Talking to the portfolio API failed.
    Network(NetworkError),

    /// Login, session or admin gating failed.
    Auth(AuthError),

    /// Gallery input was invalid (folder, image URL, files).
    Gallery(GalleryError),

    /// Carousel store misuse.
    Carousel(CarouselError),

    /// Invalid configuration or carousel properties.
    Config(ConfigError),

    /// Filesystem/OS failure.
    System(SystemError),
}

impl FolioError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::Network(err) => match err.status() {
                Some(401) | Some(403) => ErrorCategory::Auth,
                Some(status) if status >= 500 => ErrorCategory::Server,
                Some(_) => ErrorCategory::User,
                None => match err {
                    NetworkError::InvalidResponse { .. } => ErrorCategory::Client,
                    NetworkError::InvalidUrl { .. } => ErrorCategory::Configuration,
                    _ => ErrorCategory::Network,
                },
            },
            FolioError::Auth(err) => {
                if err.requires_reauth() {
                    ErrorCategory::Auth
                } else {
                    ErrorCategory::User
                }
            }
            FolioError::Gallery(_) => ErrorCategory::User,
            FolioError::Carousel(_) => ErrorCategory::Client,
            FolioError::Config(_) => ErrorCategory::Configuration,
            FolioError::System(_) => ErrorCategory::System,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            FolioError::Network(err) => err.is_retryable(),
            FolioError::System(err) => err.is_transient(),
            _ => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::Network(err) => err.user_message(),
            FolioError::Auth(err) => err.user_message(),
            FolioError::Gallery(err) => err.to_string(),
            FolioError::Carousel(err) => err.to_string(),
            FolioError::Config(err) => err.to_string(),
            FolioError::System(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::Network(err) => err.error_code(),
            FolioError::Auth(err) => err.error_code(),
            FolioError::Gallery(_) => "E_GALLERY",
            FolioError::Carousel(_) => "E_CAROUSEL",
            FolioError::Config(_) => "E_CONFIG",
            FolioError::System(err) => err.error_code(),
        }
    }
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioError::Network(err) => write!(f, "{}", err),
            FolioError::Auth(err) => write!(f, "{}", err),
            FolioError::Gallery(err) => write!(f, "{}", err),
            FolioError::Carousel(err) => write!(f, "{}", err),
            FolioError::Config(err) => write!(f, "{}", err),
            FolioError::System(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FolioError::Network(err) => Some(err),
            FolioError::Auth(err) => Some(err),
            FolioError::Gallery(err) => Some(err),
            FolioError::Carousel(err) => Some(err),
            FolioError::Config(err) => Some(err),
            FolioError::System(err) => Some(err),
        }
    }
}

impl From<NetworkError> for FolioError {
    fn from(err: NetworkError) -> Self {
        FolioError::Network(err)
    }
}

impl From<AuthError> for FolioError {
    fn from(err: AuthError) -> Self {
        FolioError::Auth(err)
    }
}

impl From<GalleryError> for FolioError {
    fn from(err: GalleryError) -> Self {
        FolioError::Gallery(err)
    }
}

impl From<CarouselError> for FolioError {
    fn from(err: CarouselError) -> Self {
        FolioError::Carousel(err)
    }
}

impl From<ConfigError> for FolioError {
    fn from(err: ConfigError) -> Self {
        FolioError::Config(err)
    }
}

impl From<SystemError> for FolioError {
    fn from(err: SystemError) -> Self {
        FolioError::System(err)
    }
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::System(classify_io_error(err, None, "perform I/O"))
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Network(NetworkError::InvalidResponse {
            message: err.to_string(),
        })
    }
}
