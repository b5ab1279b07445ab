// Collection store
// Loads and persists whole collections as pretty-printed JSON arrays

use serde_json::Value;
use std::sync::Arc;

use super::{BlobStore, StorageError};

/// One stored record: a JSON object keyed by field name.
///
/// Field order is preserved (serde_json's `preserve_order` feature), with
/// one distinguished `id` field holding a positive integer unique within
/// its collection. All other fields are opaque caller payload.
pub type Record = serde_json::Map<String, Value>;

/// Reads and writes ordered record sequences through a [`BlobStore`].
///
/// There is no cache: every call re-reads or rewrites the entire
/// collection, so the blob store stays the sole source of truth between
/// requests.
#[derive(Clone)]
pub struct CollectionStore {
    blobs: Arc<dyn BlobStore>,
}

impl CollectionStore {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self { blobs }
    }

    /// Load the full record sequence for a named collection
    pub async fn load(&self, name: &str) -> Result<Vec<Record>, StorageError> {
        let raw = self.blobs.read(name).await?;
        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            name: name.to_string(),
            source,
        })
    }

    /// Persist the full record sequence for a named collection
    pub async fn save(&self, name: &str, records: &[Record]) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string_pretty(records).map_err(|source| StorageError::Serialize {
                name: name.to_string(),
                source,
            })?;
        self.blobs.write(name, raw).await
    }
}
