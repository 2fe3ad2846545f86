//! Login and the cached admin session.

pub mod client;
pub mod session;

pub use client::SessionClient;
pub use session::{Session, SessionStore, User};
