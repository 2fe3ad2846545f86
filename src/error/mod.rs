//! Unified error handling for folio.
//!
//! - **Error categories** decide retry behavior and the hint printed by the CLI
//! - **Domain errors** for network, auth and system failures
//! - **`FolioError`** wraps those plus the leaf errors of the carousel,
//!   gallery and config modules
//! - **`FolioResult<T>`** is the alias used across the crate
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, DNS, timeout | Yes |
//! | Auth | Missing or rejected login | No |
//! | Server | API 5xx | Yes |
//! | Client | Malformed data, store misuse | No |
//! | User | Bad folder, bad image URL | No |
//! | System | Filesystem | Sometimes |
//! | Configuration | FOLIO_* variables, carousel props | No |

mod auth;
mod category;
mod folio_error;
mod network;
mod result;
mod system;

pub use auth::AuthError;
pub use category::ErrorCategory;
pub use folio_error::FolioError;
pub use network::NetworkError;
pub use result::FolioResult;
pub use system::{classify_io_error, SystemError};
