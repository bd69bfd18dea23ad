use thiserror::Error;

/// Failure reported by object storage.
///
/// The message carries the collaborator's own detail so it can be shown to
/// the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("object not found: {0}")]
    NotFound(String),

    #[error("the resource already exists: {0}")]
    AlreadyExists(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("invalid signature or expired link")]
    InvalidSignature,

    #[error("{0}")]
    Backend(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(err.to_string()),
            std::io::ErrorKind::AlreadyExists => StorageError::AlreadyExists(err.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::PermissionDenied(err.to_string())
            }
            _ => StorageError::Backend(err.to_string()),
        }
    }
}
