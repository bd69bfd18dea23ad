//! Object storage port - abstracts the document bucket
//!
//! Every object lives at `{namespace}/{storage_key}`. Implementations report
//! failures as [`StorageError`] with the backend's own detail.

use async_trait::async_trait;
use std::time::Duration;

use super::StorageError;
use crate::document::DocumentEntry;
use crate::ids::{Namespace, ObjectPath};
use crate::links::SignedUrl;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadOptions {
    /// Replace an existing object at the same path instead of failing.
    pub overwrite: bool,
}

#[async_trait]
pub trait ObjectStoragePort: Send + Sync {
    /// List the objects directly under `namespace`, in backend order.
    async fn list(&self, namespace: &Namespace) -> Result<Vec<DocumentEntry>, StorageError>;

    /// Delete one object.
    async fn remove(&self, path: &ObjectPath) -> Result<(), StorageError>;

    /// Issue a URL that grants read access to `path` for `ttl`.
    async fn create_signed_url(
        &self,
        path: &ObjectPath,
        ttl: Duration,
    ) -> Result<SignedUrl, StorageError>;

    /// Move an object. Fails if `to` already exists; on failure `from` is
    /// left intact.
    async fn move_object(&self, from: &ObjectPath, to: &ObjectPath) -> Result<(), StorageError>;

    /// Store `bytes` at `path`.
    async fn upload(
        &self,
        path: &ObjectPath,
        bytes: Vec<u8>,
        options: UploadOptions,
    ) -> Result<(), StorageError>;

    /// Non-expiring URL for objects in public buckets.
    fn public_url(&self, path: &ObjectPath) -> String;
}

/// Resolves a signed URL back into the object bytes.
#[async_trait]
pub trait ObjectFetchPort: Send + Sync {
    async fn fetch(&self, url: &SignedUrl) -> Result<Vec<u8>, StorageError>;
}
