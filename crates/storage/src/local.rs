//! Filesystem-backed image store for development and single-node deploys.

use std::path::PathBuf;

use async_trait::async_trait;
use plantguard_core::store::{ImageFile, ImageStore, StorageError};

use crate::{key_from_url, storage_key};

/// Stores uploaded images under a local directory. The API serves that
/// directory statically so the returned URLs resolve.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    root: PathBuf,
    public_base: String,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into(),
        }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn url_for(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn upload(&self, file: &ImageFile) -> Result<String, StorageError> {
        let key = storage_key(&file.file_name);
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::Backend(format!("Failed to create upload dir: {e}")))?;
        let path = self.root.join(&key);
        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|e| StorageError::Backend(format!("Failed to write {}: {e}", path.display())))?;
        tracing::debug!(key = %key, bytes = file.size(), "stored image locally");
        Ok(self.url_for(&key))
    }

    async fn delete(&self, url: &str) -> Result<(), StorageError> {
        let key = key_from_url(url, &self.public_base)?;
        let path = self.root.join(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            // Deleting an already-gone blob is not an error.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Backend(format!(
                "Failed to delete {}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> ImageFile {
        ImageFile {
            file_name: "leaf.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3, 4],
        }
    }

    #[tokio::test]
    async fn upload_writes_file_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path(), "http://localhost:3000/uploads/");

        let url = store.upload(&sample_file()).await.unwrap();
        assert!(url.starts_with("http://localhost:3000/uploads/"));
        assert!(url.ends_with(".png"));

        let key = url.rsplit('/').next().unwrap();
        let contents = tokio::fs::read(dir.path().join(key)).await.unwrap();
        assert_eq!(contents, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn delete_removes_the_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path(), "http://localhost:3000/uploads");

        let url = store.upload(&sample_file()).await.unwrap();
        store.delete(&url).await.unwrap();

        let key = url.rsplit('/').next().unwrap();
        assert!(!dir.path().join(key).exists());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path(), "http://localhost:3000/uploads");

        let url = store.upload(&sample_file()).await.unwrap();
        store.delete(&url).await.unwrap();
        store.delete(&url).await.unwrap();
    }

    #[tokio::test]
    async fn delete_rejects_foreign_urls() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path(), "http://localhost:3000/uploads");

        let err = store
            .delete("http://evil.test/uploads/abc.png")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidReference(_)));
    }
}
