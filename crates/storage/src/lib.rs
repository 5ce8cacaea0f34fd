//! Blob store providers for uploaded crop images.
//!
//! Implements [`plantguard_core::store::ImageStore`] over a local
//! filesystem directory (served publicly by the API) and over S3. Both
//! providers issue URLs of the form `<public base>/<key>` where the key is
//! a UUID v4 preserving the original file extension, and both refuse to
//! delete URLs outside their own namespace.

pub mod local;
pub mod s3;

pub use local::LocalImageStore;
pub use s3::S3ImageStore;

use plantguard_core::error::CoreError;
use plantguard_core::store::StorageError;

/// Storage backend selector, parsed from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Local,
    S3,
}

impl StorageBackend {
    /// Parse from the `STORAGE_BACKEND` config value.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "local" => Ok(Self::Local),
            "s3" => Ok(Self::S3),
            other => Err(CoreError::Validation(format!(
                "Unknown storage backend '{other}'. Must be one of: local, s3"
            ))),
        }
    }
}

/// Generate a globally unique storage key, preserving the original file
/// extension when there is one.
pub(crate) fn storage_key(file_name: &str) -> String {
    let id = uuid::Uuid::new_v4();
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => format!("{id}.{ext}"),
        _ => id.to_string(),
    }
}

/// Extract the storage key from a URL previously issued against
/// `public_base`. Keys never contain path separators, so anything with one
/// is a foreign reference.
pub(crate) fn key_from_url<'a>(url: &'a str, public_base: &str) -> Result<&'a str, StorageError> {
    let base = public_base.trim_end_matches('/');
    let key = url
        .strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('/'))
        .ok_or_else(|| StorageError::InvalidReference(url.to_string()))?;
    if key.is_empty() || key.contains('/') || key.contains("..") {
        return Err(StorageError::InvalidReference(url.to_string()));
    }
    Ok(key)
}
