//! Cached login session.
//!
//! The session lives in `~/.folio/session.json` and gates the admin screen
//! and the upload/delete commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::FOLIO_DIR;
use crate::error::{classify_io_error, AuthError, FolioResult, SystemError};

/// The session file name.
const SESSION_FILE: &str = "session.json";

/// Account returned by the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A bearer token and the user it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    /// Whether the session may use the admin endpoints.
    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }

    /// The session, if it belongs to an admin.
    pub fn require_admin(&self) -> Result<&Self, AuthError> {
        if self.is_admin() {
            Ok(self)
        } else {
            Err(AuthError::NotAdmin {
                username: self.user.username.clone(),
            })
        }
    }
}

/// Reads and writes the cached session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at `~/.folio/session.json`.
    pub fn new() -> Result<Self, SystemError> {
        let home = dirs::home_dir().ok_or(SystemError::NoHomeDirectory)?;
        Ok(Self::with_path(home.join(FOLIO_DIR).join(SESSION_FILE)))
    }

    /// Store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::with_path(dir.join(SESSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cached session. A missing or unreadable file means logged out.
    pub fn load(&self) -> Option<Session> {
        let file = File::open(&self.path).ok()?;
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "ignoring corrupt session file");
                None
            }
        }
    }

    /// The cached session, or [`AuthError::NotLoggedIn`].
    pub fn require(&self) -> Result<Session, AuthError> {
        self.load().ok_or(AuthError::NotLoggedIn)
    }

    /// Persist `session`, creating the directory if needed.
    pub fn save(&self, session: &Session) -> Result<(), AuthError> {
        let save_failed = |err: &dyn std::fmt::Display| AuthError::SessionSaveFailed {
            message: format!("{}: {}", self.path.display(), err),
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| save_failed(&e))?;
        }
        let file = File::create(&self.path).map_err(|e| save_failed(&e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, session).map_err(|e| save_failed(&e))?;
        writer.flush().map_err(|e| save_failed(&e))?;

        tracing::info!(user = %session.user.username, "session saved");
        Ok(())
    }

    /// Forget the session. Succeeds if there was none.
    pub fn clear(&self) -> FolioResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("session cleared");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(classify_io_error(err, Some(self.path.clone()), "remove").into()),
        }
    }
}
