//! Concrete implementations of trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - configurable HTTP responses
//! - [`mock::StaticImageSource`] - canned image listings per folder

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, StaticImageSource};
pub use reqwest_http::ReqwestHttpClient;
