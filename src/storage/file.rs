// File-backed blob store
// One <data_dir>/<collection>.json file per collection

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::{BlobStore, StorageError};

/// Durable blob store backed by JSON files under a data directory.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn blob_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{name}.json"))
    }
}

#[async_trait]
impl BlobStore for FileStore {
    async fn read(&self, name: &str) -> Result<String, StorageError> {
        fs::read_to_string(self.blob_path(name))
            .await
            .map_err(|source| StorageError::Read {
                name: name.to_string(),
                source,
            })
    }

    async fn write(&self, name: &str, contents: String) -> Result<(), StorageError> {
        let wrap = |source| StorageError::Write {
            name: name.to_string(),
            source,
        };

        fs::create_dir_all(&self.data_dir).await.map_err(wrap)?;

        // Write a sibling temp file and rename it into place so a reader in
        // this process never observes a partially written collection.
        let path = self.blob_path(name);
        let tmp = self.data_dir.join(format!(".{name}.json.tmp"));
        fs::write(&tmp, contents).await.map_err(wrap)?;
        fs::rename(&tmp, &path).await.map_err(wrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        store
            .write("questions", "[]".to_string())
            .await
            .expect("write");
        let contents = store.read("questions").await.expect("read");
        assert_eq!(contents, "[]");
    }

    #[tokio::test]
    async fn test_read_missing_blob_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        let err = store.read("questions").await.unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
        assert!(err.to_string().contains("questions"));
    }

    #[tokio::test]
    async fn test_write_creates_data_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("data");
        let store = FileStore::new(&nested);

        store
            .write("answers", "[]".to_string())
            .await
            .expect("write");
        assert!(nested.join("answers.json").exists());
    }

    #[tokio::test]
    async fn test_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        store
            .write("questions", "[1]".to_string())
            .await
            .expect("write");
        assert!(!dir.path().join(".questions.json.tmp").exists());
    }
}
