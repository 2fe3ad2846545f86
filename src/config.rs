//! Runtime configuration.
//!
//! `FolioConfig` is built with defaults, builder methods and `from_env()`.
//! Every `FOLIO_*` variable is optional.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::carousel::{DEFAULT_INTERVAL, FADE_DURATION};

/// Base URL of the portfolio API when `FOLIO_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Folder shown by the home page carousel.
pub const DEFAULT_FOLDER: &str = "hero";

/// Directory under the home directory holding the session and the log.
pub const FOLIO_DIR: &str = ".folio";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "folio=info";

/// Invalid configuration or carousel properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The carousel folder name was empty.
    #[error("carousel folder must not be empty")]
    EmptyFolder,

    /// The carousel interval does not leave room for the fade.
    #[error("carousel interval {interval_ms}ms must be longer than the {fade_ms}ms fade")]
    IntervalTooShort { interval_ms: u128, fade_ms: u128 },

    /// An environment variable held an unusable value.
    #[error("invalid value {value:?} for {variable}")]
    InvalidEnv { variable: String, value: String },
}

/// Configuration for a folio session.
///
/// # Example
///
/// ```ignore
/// use folio::config::FolioConfig;
///
/// let config = FolioConfig::default()
///     .with_api_url("http://portfolio.local")
///     .with_folder("carbuild");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FolioConfig {
    /// Base URL of the portfolio API, without a trailing slash
    pub api_url: String,
    /// Carousel advance interval
    pub interval: Duration,
    /// Folder shown by the home page carousel
    pub folder: String,
    /// Tracing filter directive (`FOLIO_LOG`)
    pub log_filter: String,
    /// Directory for the session cache and the log file
    pub data_dir: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            interval: DEFAULT_INTERVAL,
            folder: DEFAULT_FOLDER.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            data_dir: dirs::home_dir().map(|home| home.join(FOLIO_DIR)),
        }
    }
}

impl FolioConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL. Trailing slashes are dropped.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the carousel interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the home page folder.
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Set the tracing filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Path of the cached session file, if a data directory is known.
    pub fn session_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join("session.json"))
    }

    /// Path of the log file, if a data directory is known.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join("folio.log"))
    }

    /// Check the values that the carousel depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.folder.trim().is_empty() {
            return Err(ConfigError::EmptyFolder);
        }
        if self.interval <= FADE_DURATION {
            return Err(ConfigError::IntervalTooShort {
                interval_ms: self.interval.as_millis(),
                fade_ms: FADE_DURATION.as_millis(),
            });
        }
        Ok(())
    }

    /// Build the config from `FOLIO_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("FOLIO_API_URL") {
            config = config.with_api_url(url);
        }
        if let Some(raw) = lookup("FOLIO_INTERVAL_MS") {
            let millis: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                variable: "FOLIO_INTERVAL_MS".to_string(),
                value: raw.clone(),
            })?;
            config = config.with_interval(Duration::from_millis(millis));
        }
        if let Some(folder) = lookup("FOLIO_FOLDER") {
            config = config.with_folder(folder);
        }
        if let Some(filter) = lookup("FOLIO_LOG") {
            config = config.with_log_filter(filter);
        }
        if let Some(home) = lookup("FOLIO_HOME") {
            config = config.with_data_dir(home);
        }

        config.validate()?;
        Ok(config)
    }
}
