use std::sync::Arc;

use dv_core::ids::StorageKey;
use dv_core::notice::Notice;
use dv_core::ports::{NoticePort, ObjectStoragePort};
use tracing::{error, info, warn};

use crate::error::DocumentError;
use crate::identity::IdentityContext;

/// Use case for deleting one document from object storage
/// 从对象存储删除单个文档的用例
pub struct DeleteDocument {
    identity: IdentityContext,
    storage: Arc<dyn ObjectStoragePort>,
    notices: Arc<dyn NoticePort>,
}

impl DeleteDocument {
    pub fn from_ports(
        identity: IdentityContext,
        storage: Arc<dyn ObjectStoragePort>,
        notices: Arc<dyn NoticePort>,
    ) -> Self {
        Self {
            identity,
            storage,
            notices,
        }
    }

    /// Removes the object stored under `key` in the current user's namespace.
    ///
    /// Nothing is attempted without a signed-in user. The outcome is always
    /// reported through the notice port; the caller is responsible for
    /// updating any local view, and must only do so on `Ok`.
    #[tracing::instrument(
        name = "usecase.delete_document.execute",
        skip(self),
        fields(storage_key = %key)
    )]
    pub async fn execute(&self, key: &StorageKey) -> Result<(), DocumentError> {
        let Some(namespace) = self.identity.current_namespace().await else {
            warn!("delete requested without a signed-in user");
            return Err(DocumentError::AuthRequired);
        };

        let path = namespace.path(key);
        match self.storage.remove(&path).await {
            Ok(()) => {
                info!(path = %path, "Deleted document");
                self.notices
                    .notify(Notice::affirmative("File deleted successfully!"));
                Ok(())
            }
            Err(e) => {
                error!(path = %path, error = %e, "Delete failed");
                let err = DocumentError::DeleteFailed(e.to_string());
                self.notices.notify(err.notice());
                Err(err)
            }
        }
    }
}
