//! Blob store seam for uploaded crop images.
//!
//! Providers live in `plantguard-storage`; the pipeline only sees this
//! trait. URLs returned by `upload` are treated as opaque public
//! references by the rest of the system.

use async_trait::async_trait;

/// An image as received from the client: declared name, content type, and bytes.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing store rejected the operation (quota, permission, network).
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// The URL does not belong to this store's namespace.
    #[error("Invalid image reference: {0}")]
    InvalidReference(String),
}

/// Upload and delete of image blobs.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store the image under a globally unique key and return a URL that
    /// resolves to the bytes without further authentication.
    async fn upload(&self, file: &ImageFile) -> Result<String, StorageError>;

    /// Permanently remove the object a previously issued URL points at.
    async fn delete(&self, url: &str) -> Result<(), StorageError>;
}
