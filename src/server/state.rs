//! Shared application state for the API server

use crate::transforms::registry::TransformRegistry;
use std::sync::Arc;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registered transforms; immutable after startup
    pub registry: Arc<TransformRegistry>,
}

impl AppState {
    /// Creates a new application state
    pub fn new(registry: TransformRegistry) -> Self {
        AppState {
            registry: Arc::new(registry),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TransformRegistry::new())
    }
}
