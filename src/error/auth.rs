//! Authentication-related error types.

use std::fmt;

/// Authentication-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// No cached session; the user never logged in or logged out.
    NotLoggedIn,

    /// The server rejected the email/password pair.
    InvalidCredentials,

    /// The cached token was rejected by the server.
    SessionRejected,

    /// Logged in, but the account is not an admin.
    NotAdmin { username: String },

    /// The session could not be written to disk.
    SessionSaveFailed { message: String },
}

impl AuthError {
    /// Check if this error is resolved by logging in again.
    pub fn requires_reauth(&self) -> bool {
        matches!(self, AuthError::NotLoggedIn | AuthError::SessionRejected)
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::NotLoggedIn => "You are not logged in. Run `folio login <email>`.".to_string(),
            AuthError::InvalidCredentials => "Invalid email or password.".to_string(),
            AuthError::SessionRejected => {
                "Your session was rejected by the server. Please log in again.".to_string()
            }
            AuthError::NotAdmin { username } => {
                format!("{} is not an admin account.", username)
            }
            AuthError::SessionSaveFailed { message } => {
                format!("Could not save the session: {}", message)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::NotLoggedIn => "E_AUTH_NONE",
            AuthError::InvalidCredentials => "E_AUTH_INVALID",
            AuthError::SessionRejected => "E_AUTH_REJECTED",
            AuthError::NotAdmin { .. } => "E_AUTH_NOT_ADMIN",
            AuthError::SessionSaveFailed { .. } => "E_AUTH_SAVE",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotLoggedIn => write!(f, "not logged in"),
            AuthError::InvalidCredentials => write!(f, "invalid credentials"),
            AuthError::SessionRejected => write!(f, "session rejected by server"),
            AuthError::NotAdmin { username } => write!(f, "{} is not an admin", username),
            AuthError::SessionSaveFailed { message } => {
                write!(f, "failed to save session: {}", message)
            }
        }
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_reauth() {
        assert!(AuthError::NotLoggedIn.requires_reauth());
        assert!(AuthError::SessionRejected.requires_reauth());
        assert!(!AuthError::InvalidCredentials.requires_reauth());
        assert!(!AuthError::NotAdmin {
            username: "guest".to_string()
        }
        .requires_reauth());
    }

    #[test]
    fn test_messages() {
        let err = AuthError::NotAdmin {
            username: "guest".to_string(),
        };
        assert_eq!(err.to_string(), "guest is not an admin");
        assert!(err.user_message().contains("guest"));
        assert_eq!(AuthError::NotLoggedIn.error_code(), "E_AUTH_NONE");
    }
}
