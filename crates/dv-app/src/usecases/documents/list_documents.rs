use std::sync::Arc;

use dv_core::document::DocumentEntry;
use dv_core::ids::Namespace;
use dv_core::ports::ObjectStoragePort;
use tracing::error;

use crate::error::DocumentError;

/// Use case for listing the documents stored under a namespace
/// 列出命名空间下文档的用例
///
/// This is the remote listing adapter of the document view: it performs the
/// read and nothing else. Callers decide how a failure is shown.
pub struct ListDocuments {
    storage: Arc<dyn ObjectStoragePort>,
}

impl ListDocuments {
    pub fn from_port(storage: Arc<dyn ObjectStoragePort>) -> Self {
        Self { storage }
    }

    /// Fetches the raw entries under `namespace`, in the order storage
    /// returns them.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::ListingFailed`] carrying the storage error
    /// detail.
    #[tracing::instrument(
        name = "usecase.list_documents.execute",
        skip(self),
        fields(namespace = %namespace)
    )]
    pub async fn execute(&self, namespace: &Namespace) -> Result<Vec<DocumentEntry>, DocumentError> {
        self.storage.list(namespace).await.map_err(|e| {
            error!(error = %e, "Error fetching documents");
            DocumentError::ListingFailed(e.to_string())
        })
    }
}
