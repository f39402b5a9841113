use crate::config::ServerConfig;

/// Shared application state
///
/// Request handling is stateless; this only carries the configuration the
/// handlers read (body limit).
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: ServerConfig,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}
