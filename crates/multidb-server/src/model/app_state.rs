//! Shared application state

use std::sync::Arc;

use multidb_persistence::BackendRegistry;

use super::config::Configuration;

/// State shared by all request handlers. Read-only after startup.
pub struct AppState {
    pub configuration: Configuration,
    pub registry: Arc<BackendRegistry>,
}

impl AppState {
    pub fn registry(&self) -> &BackendRegistry {
        &self.registry
    }
}
