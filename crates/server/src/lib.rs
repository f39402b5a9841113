//! textproc server - HTTP front end for whitespace normalization
//!
//! Exposes a single endpoint that accepts form-encoded text and answers with
//! the same text, whitespace runs collapsed to single spaces and both edges
//! trimmed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API
//!
//! `POST /process` with field `text` (urlencoded body or query string).
//!
//! | Condition                  | Status | Body                 |
//! |----------------------------|--------|----------------------|
//! | success                    | 200    | normalized text      |
//! | method other than `POST`   | 405    | `Method not allowed` |
//! | `text` missing or empty    | 400    | `No text provided`   |
//! | any other path             | 404    | `404 page not found` |
//!
//! The listener defaults to `0.0.0.0:8080`; see [`ServerConfig`].

pub mod config;
pub mod error;
pub mod form;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{bind, build_router, serve, start_server};
pub use state::ServerState;
