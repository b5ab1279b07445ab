// Storage module entry point
// Durable blob storage keyed by collection name, plus the JSON collection layer

mod collection;
mod file;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

// Re-export public types
pub use collection::{CollectionStore, Record};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage failures, all of which surface to clients as HTTP 500
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read collection '{name}': {source}")]
    Read {
        name: String,
        source: std::io::Error,
    },

    #[error("failed to write collection '{name}': {source}")]
    Write {
        name: String,
        source: std::io::Error,
    },

    #[error("collection '{name}' is not valid JSON: {source}")]
    Corrupt {
        name: String,
        source: serde_json::Error,
    },

    #[error("failed to serialize collection '{name}': {source}")]
    Serialize {
        name: String,
        source: serde_json::Error,
    },
}

/// Opaque durable key-value blob store, keyed by collection name.
///
/// The production implementation is [`FileStore`]; tests substitute
/// [`MemoryStore`]. Every call re-reads or rewrites the whole blob, there
/// is no caching and no locking discipline. Callers that need stronger
/// consistency across concurrent writers must serialize access themselves.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read the full contents of a named blob
    async fn read(&self, name: &str) -> Result<String, StorageError>;

    /// Replace the full contents of a named blob
    async fn write(&self, name: &str, contents: String) -> Result<(), StorageError>;
}
