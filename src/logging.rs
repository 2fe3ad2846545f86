//! Tracing setup.
//!
//! The TUI owns stdout, so events go to `~/.folio/folio.log`. CLI commands
//! log to stderr instead.

use std::fs::{self, File, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::FolioConfig;
use crate::error::{classify_io_error, SystemError};

/// Filter from `FOLIO_LOG`-style directives, falling back to the default.
pub fn env_filter(config: &FolioConfig) -> EnvFilter {
    EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER))
}

fn open_log_file(config: &FolioConfig) -> Result<Option<File>, SystemError> {
    let Some(path) = config.log_path() else {
        return Ok(None);
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| classify_io_error(e, Some(dir.to_path_buf()), "create log directory"))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map(Some)
        .map_err(|e| classify_io_error(e, Some(path), "open log file"))
}

/// Send events to the log file for the lifetime of the TUI.
///
/// Without a data directory logging stays off rather than corrupting the
/// screen. A second call is a no-op.
pub fn init_tui_logging(config: &FolioConfig) -> Result<(), SystemError> {
    let Some(file) = open_log_file(config)? else {
        return Ok(());
    };
    let _ = fmt()
        .with_env_filter(env_filter(config))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

/// Warnings and errors of CLI commands go to stderr.
pub fn init_cli_logging(config: &FolioConfig) {
    let _ = fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
