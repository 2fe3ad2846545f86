//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`StaticImageSource`] - image source with canned folder listings

pub mod http;
pub mod images;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use images::StaticImageSource;
