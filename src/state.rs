//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{MemoryStore, PgStore, SharedStore};

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: SharedStore, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }

    /// Estado respaldado por PostgreSQL
    pub fn with_postgres(store: PgStore, config: EnvironmentConfig) -> Self {
        Self::new(Arc::new(store), config)
    }

    /// Estado respaldado por el store en memoria
    pub fn in_memory(store: MemoryStore, config: EnvironmentConfig) -> Self {
        Self::new(Arc::new(store), config)
    }
}
