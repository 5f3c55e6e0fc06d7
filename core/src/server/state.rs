//! Shared application state for the HTTP API.

use super::error::ApiError;
use crate::config::ServerConfig;
use crate::tickets::storage::{FileStore, MemoryStore, StorageError, TicketStore};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared state accessible by all handlers via axum's State extractor.
pub struct AppState {
    pub store: Arc<dyn TicketStore>,
    /// Held for the duration of every mutation so writes never interleave.
    pub write_lock: Mutex<()>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let store: Arc<dyn TicketStore> = if config.ephemeral {
            log::info!("[server] Keeping tickets in memory");
            Arc::new(MemoryStore::new())
        } else {
            log::info!("[server] Storing tickets in {}", config.data_root.display());
            Arc::new(FileStore::new(&config.data_root))
        };
        Self::new(store)
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }

    /// Run a store call on the blocking pool; file-backed stores do sync IO.
    pub async fn read<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&dyn TicketStore) -> Result<T, StorageError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || f(store.as_ref()))
            .await
            .map_err(|e| ApiError::Internal(format!("Store task failed: {e}")))?
            .map_err(ApiError::from)
    }

    /// Like [`AppState::read`], holding the write lock until the call returns.
    pub async fn write<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&dyn TicketStore) -> Result<T, StorageError> + Send + 'static,
        T: Send + 'static,
    {
        let _guard = self.write_lock.lock().await;
        self.read(f).await
    }
}
