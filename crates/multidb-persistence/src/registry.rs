//! Backend registry
//!
//! Built once at process start, read-only afterwards. Construction is
//! eager: every configured backend is connected and health-checked before
//! the registry exists, so an unreachable store is a fatal startup error
//! rather than a deferred per-request one.

use std::sync::Arc;

use anyhow::Context;
use multidb_common::MultiDbError;

use crate::document::DocumentUserStore;
use crate::model::{BackendConfig, BackendSettings};
use crate::sql::RelationalUserStore;
use crate::traits::UserStore;

/// One registered backend: logical name, display label, adapter.
#[derive(Clone)]
pub struct BackendHandle {
    pub name: String,
    pub display_name: String,
    pub store: Arc<dyn UserStore>,
}

/// Process-wide mapping from logical backend name to its adapter.
pub struct BackendRegistry {
    backends: Vec<BackendHandle>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self {
            backends: Vec::new(),
        }
    }

    /// Connect every configured backend and register it under its name.
    pub async fn connect(configs: &[BackendConfig]) -> anyhow::Result<Self> {
        let mut registry = Self::new();

        for config in configs {
            let store: Arc<dyn UserStore> = match &config.settings {
                BackendSettings::Relational(settings) => Arc::new(
                    RelationalUserStore::connect(settings)
                        .await
                        .with_context(|| {
                            format!("failed to connect relational backend '{}'", config.name)
                        })?,
                ),
                BackendSettings::Document(settings) => Arc::new(
                    DocumentUserStore::connect(settings).await.with_context(|| {
                        format!("failed to connect document backend '{}'", config.name)
                    })?,
                ),
            };
            registry.register(&config.name, &config.display_name, store)?;
        }

        Ok(registry)
    }

    /// Register an already constructed adapter. Names must be unique.
    pub fn register(
        &mut self,
        name: &str,
        display_name: &str,
        store: Arc<dyn UserStore>,
    ) -> Result<(), MultiDbError> {
        if self.backends.iter().any(|b| b.name == name) {
            return Err(MultiDbError::ConfigError(format!(
                "backend '{}' registered twice",
                name
            )));
        }
        self.backends.push(BackendHandle {
            name: name.to_string(),
            display_name: display_name.to_string(),
            store,
        });
        Ok(())
    }

    /// Look up an adapter by logical name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn UserStore>, MultiDbError> {
        self.backends
            .iter()
            .find(|b| b.name == name)
            .map(|b| b.store.clone())
            .ok_or_else(|| {
                MultiDbError::ConfigError(format!("no backend registered under '{}'", name))
            })
    }

    /// Registered backends in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &BackendHandle> {
        self.backends.iter()
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}
