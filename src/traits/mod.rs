//! Trait abstractions at the I/O seams.
//!
//! - [`HttpClient`] - every request against the portfolio API
//!
//! Production implementations live in `crate::adapters`, test doubles in
//! `crate::adapters::mock`.

pub mod http;

pub use http::{bearer_headers, FilePart, Headers, HttpClient, HttpError, MultipartForm, Response};
