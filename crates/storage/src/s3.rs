//! S3-backed image store.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use plantguard_core::store::{ImageFile, ImageStore, StorageError};

use crate::{key_from_url, storage_key};

/// Stores uploaded images in an S3 bucket. Objects are written under their
/// storage key at the bucket root and served through `public_base`
/// (typically the bucket website endpoint or a CDN in front of it).
#[derive(Debug, Clone)]
pub struct S3ImageStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base: String,
}

impl S3ImageStore {
    pub fn new(
        client: aws_sdk_s3::Client,
        bucket: impl Into<String>,
        public_base: impl Into<String>,
    ) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            public_base: public_base.into(),
        }
    }

    /// Build a store from the ambient AWS environment (credentials chain,
    /// region from `AWS_REGION`).
    pub async fn from_env(bucket: impl Into<String>, public_base: impl Into<String>) -> Self {
        let config = aws_config::load_from_env().await;
        Self::new(aws_sdk_s3::Client::new(&config), bucket, public_base)
    }

    fn url_for(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl ImageStore for S3ImageStore {
    async fn upload(&self, file: &ImageFile) -> Result<String, StorageError> {
        let key = storage_key(&file.file_name);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(&file.content_type)
            .body(ByteStream::from(file.bytes.clone()))
            .send()
            .await
            .map_err(|e| StorageError::Backend(format!("S3 put_object failed: {e}")))?;
        tracing::debug!(bucket = %self.bucket, key = %key, bytes = file.size(), "stored image in S3");
        Ok(self.url_for(&key))
    }

    async fn delete(&self, url: &str) -> Result<(), StorageError> {
        let key = key_from_url(url, &self.public_base)?;
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Backend(format!("S3 delete_object failed: {e}")))?;
        Ok(())
    }
}
