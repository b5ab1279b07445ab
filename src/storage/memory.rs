// In-memory blob store
// Substitutable fake for tests and embedded use; no durability

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use super::{BlobStore, StorageError};

/// Blob store holding collections in a process-local map.
///
/// Mirrors [`super::FileStore`] semantics: reading a name that was never
/// written fails the same way a missing file does.
#[derive(Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a collection blob, typically with an empty JSON array
    pub fn seed(self, name: &str, contents: &str) -> Self {
        self.blobs
            .lock()
            .expect("memory store poisoned")
            .insert(name.to_string(), contents.to_string());
        self
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    async fn read(&self, name: &str) -> Result<String, StorageError> {
        let blobs = self.blobs.lock().expect("memory store poisoned");
        blobs
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::Read {
                name: name.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such blob"),
            })
    }

    async fn write(&self, name: &str, contents: String) -> Result<(), StorageError> {
        let mut blobs = self.blobs.lock().expect("memory store poisoned");
        blobs.insert(name.to_string(), contents);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_unseeded_fails_like_missing_file() {
        let store = MemoryStore::new();
        let err = store.read("questions").await.unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
    }

    #[tokio::test]
    async fn test_seed_then_read() {
        let store = MemoryStore::new().seed("questions", "[]");
        assert_eq!(store.read("questions").await.expect("read"), "[]");
    }
}
