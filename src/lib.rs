//! folio - a terminal client for a personal portfolio site.
//!
//! The library holds the carousel engine, the API clients and the TUI; it is
//! exposed for the binary and for integration tests.

pub mod adapters;
pub mod app;
pub mod auth;
pub mod carousel;
pub mod cli;
pub mod config;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod terminal;
pub mod traits;
pub mod ui;
