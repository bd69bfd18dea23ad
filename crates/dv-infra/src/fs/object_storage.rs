use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dv_core::document::DocumentEntry;
use dv_core::ids::{Namespace, ObjectPath, StorageKey};
use dv_core::links::SignedUrl;
use dv_core::ports::{ClockPort, ObjectFetchPort, ObjectStoragePort, StorageError, UploadOptions};
use tokio::fs;
use tracing::debug;

use super::signing::UrlSigner;

const TMP_SUFFIX: &str = ".upload.tmp";

/// Bucket-per-directory object store on the local filesystem.
/// 本地文件系统上的对象存储，每个 bucket 一个目录。
///
/// Objects live at `<root>/<bucket>/<namespace>/<key>`. Keys are flat: a key
/// that would escape its namespace directory is rejected.
pub struct FsObjectStorage {
    root: PathBuf,
    bucket: String,
    signer: Arc<UrlSigner>,
    clock: Arc<dyn ClockPort>,
}

impl FsObjectStorage {
    /// Create a store for `bucket` under `root`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::PathBuf;
    /// use std::sync::Arc;
    /// use dv_infra::{FsObjectStorage, SystemClock, UrlSigner};
    ///
    /// let signer = Arc::new(UrlSigner::new("http://localhost", "secret").unwrap());
    /// let store = FsObjectStorage::new(
    ///     PathBuf::from("/tmp/docvault"),
    ///     "documents",
    ///     signer,
    ///     Arc::new(SystemClock),
    /// );
    /// ```
    pub fn new(
        root: PathBuf,
        bucket: impl Into<String>,
        signer: Arc<UrlSigner>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            root,
            bucket: bucket.into(),
            signer,
            clock,
        }
    }

    fn namespace_dir(&self, namespace: &Namespace) -> Result<PathBuf, StorageError> {
        validate_segment(namespace.as_str())?;
        Ok(self.root.join(&self.bucket).join(namespace.as_str()))
    }

    fn object_file(&self, path: &ObjectPath) -> Result<PathBuf, StorageError> {
        validate_segment(path.key.as_str())?;
        Ok(self.namespace_dir(&path.namespace)?.join(path.key.as_str()))
    }
}

fn validate_segment(segment: &str) -> Result<(), StorageError> {
    if segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains('/')
        || segment.contains('\\')
    {
        return Err(StorageError::PermissionDenied(format!(
            "invalid object name: {segment}"
        )));
    }
    Ok(())
}

fn io_error(err: std::io::Error, path: &ObjectPath) -> StorageError {
    match err.kind() {
        std::io::ErrorKind::NotFound => StorageError::NotFound(path.to_string()),
        std::io::ErrorKind::AlreadyExists => StorageError::AlreadyExists(path.to_string()),
        _ => StorageError::from(err),
    }
}

#[async_trait]
impl ObjectStoragePort for FsObjectStorage {
    /// Lists the objects directly under the namespace directory.
    ///
    /// A namespace that has never been written to lists as empty. Entries come
    /// back in directory order, which is unspecified.
    async fn list(&self, namespace: &Namespace) -> Result<Vec<DocumentEntry>, StorageError> {
        let dir = self.namespace_dir(namespace)?;
        let mut read_dir = match fs::read_dir(&dir).await {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        while let Some(item) = read_dir.next_entry().await? {
            let metadata = item.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            let Some(name) = item.file_name().to_str().map(str::to_string) else {
                debug!(file = ?item.file_name(), "skipping non-utf8 object name");
                continue;
            };
            if name.ends_with(TMP_SUFFIX) {
                continue;
            }
            let created = metadata.created().or_else(|_| metadata.modified())?;
            entries.push(
                DocumentEntry::new(StorageKey::from_string(name), DateTime::<Utc>::from(created))
                    .with_size(metadata.len()),
            );
        }

        debug!(bucket = %self.bucket, namespace = %namespace.as_str(), count = entries.len(), "listed objects");
        Ok(entries)
    }

    async fn remove(&self, path: &ObjectPath) -> Result<(), StorageError> {
        let file = self.object_file(path)?;
        fs::remove_file(&file)
            .await
            .map_err(|e| io_error(e, path))
    }

    async fn create_signed_url(
        &self,
        path: &ObjectPath,
        ttl: Duration,
    ) -> Result<SignedUrl, StorageError> {
        let file = self.object_file(path)?;
        if !fs::try_exists(&file).await? {
            return Err(StorageError::NotFound(path.to_string()));
        }
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let expires_at_ms = self.clock.now_ms().saturating_add(ttl_ms);
        self.signer.sign(&self.bucket, path, expires_at_ms)
    }

    /// Moves an object within the bucket. An existing target is never
    /// overwritten and a failed move leaves the source in place.
    async fn move_object(&self, from: &ObjectPath, to: &ObjectPath) -> Result<(), StorageError> {
        let source = self.object_file(from)?;
        let target = self.object_file(to)?;
        if !fs::try_exists(&source).await? {
            return Err(StorageError::NotFound(from.to_string()));
        }
        if fs::try_exists(&target).await? {
            return Err(StorageError::AlreadyExists(to.to_string()));
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::rename(&source, &target)
            .await
            .map_err(|e| io_error(e, from))
    }

    /// Writes through a temporary file and a rename, so readers never observe
    /// a partially written object.
    async fn upload(
        &self,
        path: &ObjectPath,
        bytes: Vec<u8>,
        options: UploadOptions,
    ) -> Result<(), StorageError> {
        let file = self.object_file(path)?;
        if !options.overwrite && fs::try_exists(&file).await? {
            return Err(StorageError::AlreadyExists(path.to_string()));
        }
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut tmp_name = file.clone().into_os_string();
        tmp_name.push(TMP_SUFFIX);
        let tmp_path = PathBuf::from(tmp_name);
        fs::write(&tmp_path, bytes).await?;
        if let Err(e) = fs::rename(&tmp_path, &file).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(io_error(e, path));
        }
        Ok(())
    }

    fn public_url(&self, path: &ObjectPath) -> String {
        self.signer.public_url(&self.bucket, path)
    }
}

#[async_trait]
impl ObjectFetchPort for FsObjectStorage {
    /// Resolves a signed URL issued by this store to the object's bytes.
    async fn fetch(&self, url: &SignedUrl) -> Result<Vec<u8>, StorageError> {
        let verified = self.signer.verify(&url.url, self.clock.now_ms())?;
        if verified.bucket != self.bucket {
            return Err(StorageError::InvalidSignature);
        }
        let file = self.object_file(&verified.path)?;
        fs::read(&file)
            .await
            .map_err(|e| io_error(e, &verified.path))
    }
}
