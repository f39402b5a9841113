//! HTTP route handlers
//!
//! - `process`: whitespace normalization (`/process`)
//!
//! Anything else is answered by [`not_found`].

pub mod process;

use crate::error::ServerError;

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
