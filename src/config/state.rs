// Application state module
// Shared request-handling state built once at startup

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::Config;
use crate::storage::{BlobStore, CollectionStore, FileStore};

/// Application state
pub struct AppState {
    pub config: Config,
    /// Collection store over the injected blob store; the only shared
    /// mutable resource, deliberately unlocked
    pub collections: CollectionStore,
    /// Cached flag for fast access without reading config per request
    pub cached_access_log: AtomicBool,
}

impl AppState {
    /// Create `AppState` backed by the durable file store
    pub fn new(config: &Config) -> Self {
        let store = Arc::new(FileStore::new(&config.storage.data_dir));
        Self::with_store(config, store)
    }

    /// Create `AppState` with an injected blob store; tests substitute an
    /// in-memory fake here
    pub fn with_store(config: &Config, store: Arc<dyn BlobStore>) -> Self {
        Self {
            config: config.clone(),
            collections: CollectionStore::new(store),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
