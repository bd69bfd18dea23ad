use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{display_name, DocumentKind};
use crate::ids::StorageKey;

/// One stored object as reported by object storage.
/// 对象存储返回的单个文档条目。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub storage_key: StorageKey,
    pub created_at: DateTime<Utc>,
    pub size_bytes: Option<u64>,
}

impl DocumentEntry {
    pub fn new(storage_key: StorageKey, created_at: DateTime<Utc>) -> Self {
        Self {
            storage_key,
            created_at,
            size_bytes: None,
        }
    }

    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = Some(size_bytes);
        self
    }

    /// User-facing file name. Derived on every call, never stored.
    pub fn display_name(&self) -> &str {
        display_name(self.storage_key.as_str())
    }

    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_file_name(self.display_name())
    }
}
