//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration (`/process` plus a 404 fallback)
//! - Middleware stack (request ID, logging, tracing, timeout)
//! - Listener binding and graceful shutdown

use crate::config::ServerConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::{not_found, process};
use crate::state::ServerState;
use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::any;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Middleware stack, outermost first:
/// 1. HTTP tracing spans
/// 2. Request ID tracking
/// 3. Request logging
/// 4. Timeout handling
/// 5. Body size limit for extractors (multipart)
pub fn build_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/process", any(process::process_text))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_size()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the textproc HTTP server
///
/// Initializes logging, binds the configured address and serves until
/// SIGTERM or Ctrl+C. A bind failure is returned as an error and nothing is
/// served.
///
/// # Example
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config);

    let addr = config.socket_addr()?;
    let listener = bind(addr).await.inspect_err(|err| {
        tracing::error!(error = %format!("{err:#}"), "Startup failed");
    })?;

    tracing::debug!(
        "Timeout: {}s, Max body: {}MB",
        config.timeout_secs,
        config.max_body_size_mb
    );

    serve(listener, config, shutdown_signal()).await
}

/// Bind a TCP listener, attaching the address to any error.
pub async fn bind(addr: SocketAddr) -> anyhow::Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

/// Serve requests on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    config: ServerConfig,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    let app = build_router(Arc::new(ServerState::new(config)));

    tracing::info!("Text service running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Install the global subscriber. Later calls are no-ops.
fn init_tracing(config: &ServerConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .with_target(false);

    // An already installed subscriber (tests, embedding) is kept.
    let _ = if config.log_json {
        builder
            .with_thread_ids(true)
            .with_thread_names(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
