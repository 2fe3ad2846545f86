//! System-related error types.
//!
//! Filesystem problems: reading images to upload, the session cache and the
//! log file.

use std::fmt;
use std::path::PathBuf;

/// System-specific error variants.
#[derive(Debug, Clone)]
pub enum SystemError {
    /// File not found.
    FileNotFound { path: PathBuf },

    /// Permission denied for file/directory operation.
    PermissionDenied { path: PathBuf, operation: String },

    /// Generic I/O error.
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// Could not determine home directory.
    NoHomeDirectory,
}

impl SystemError {
    /// Check if this error might go away on its own.
    pub fn is_transient(&self) -> bool {
        matches!(self, SystemError::IoError { .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::FileNotFound { path } => format!("File not found: {}", path.display()),
            SystemError::PermissionDenied { path, operation } => {
                format!("Permission denied while trying to {} {}", operation, path.display())
            }
            SystemError::IoError {
                operation,
                path: Some(path),
                message,
            } => format!("Failed to {} {}: {}", operation, path.display(), message),
            SystemError::IoError {
                operation,
                path: None,
                message,
            } => format!("Failed to {}: {}", operation, message),
            SystemError::NoHomeDirectory => {
                "Could not determine your home directory. Set FOLIO_HOME.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::FileNotFound { .. } => "E_SYS_NOT_FOUND",
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::IoError { .. } => "E_SYS_IO",
            SystemError::NoHomeDirectory => "E_SYS_HOME",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for SystemError {}

/// Classify an I/O error for a specific path and operation.
pub fn classify_io_error(
    err: std::io::Error,
    path: Option<PathBuf>,
    operation: &str,
) -> SystemError {
    use std::io::ErrorKind;

    match (err.kind(), path) {
        (ErrorKind::NotFound, Some(path)) => SystemError::FileNotFound { path },
        (ErrorKind::PermissionDenied, Some(path)) => SystemError::PermissionDenied {
            path,
            operation: operation.to_string(),
        },
        (_, path) => SystemError::IoError {
            operation: operation.to_string(),
            path,
            message: err.to_string(),
        },
    }
}
