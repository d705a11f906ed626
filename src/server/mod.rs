//! REST API server exposing the registered transforms

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use handlers::{TransformInfo, TransformRequest, TransformResponse};
pub use routes::create_router;
pub use state::AppState;

use crate::transforms::registry::TransformRegistry;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server host address (default: "127.0.0.1")
    pub host: String,
    /// Server port (default: 3000)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Creates a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        ServerConfig {
            host: host.into(),
            port,
        }
    }

    /// Reads `HOST` and `PORT` from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        ServerConfig { host, port }
    }

    /// Socket address string, e.g. "127.0.0.1:3000"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Runs the API server
///
/// # Arguments
/// * `config` - Server configuration
///
/// # Returns
/// Returns an error if the server fails to start or encounters a fatal error
///
/// # Example
/// ```rust,no_run
/// use stocks::server::{run_server, ServerConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_server(ServerConfig::default()).await?;
///     Ok(())
/// }
/// ```
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let registry = TransformRegistry::new();
    tracing::debug!(entries = registry.entries().len(), "transform registry ready");

    let state = Arc::new(AppState::new(registry));
    let app = routes::create_router(state);

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
