//! textproc server binary
//!
//! Serves `POST /process` on `0.0.0.0:8080` unless configured otherwise.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
