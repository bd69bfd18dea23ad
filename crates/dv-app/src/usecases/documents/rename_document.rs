use std::sync::Arc;

use dv_core::document::rename_target_key;
use dv_core::ids::StorageKey;
use dv_core::notice::Notice;
use dv_core::ports::{NoticePort, ObjectStoragePort};
use tracing::{error, info, warn};

use crate::error::DocumentError;
use crate::identity::IdentityContext;

/// Result of a rename request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The object now lives under `to`.
    Renamed { to: StorageKey },
    /// The requested name was blank or identical; nothing was sent to storage.
    Unchanged,
}

/// Use case for renaming a document
/// 重命名文档的用例
///
/// A rename is a move within the user's namespace. The timestamp prefix of the
/// key is kept, only the display part changes. It is attempted at most once.
pub struct RenameDocument {
    identity: IdentityContext,
    storage: Arc<dyn ObjectStoragePort>,
    notices: Arc<dyn NoticePort>,
}

impl RenameDocument {
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

    #[tracing::instrument(
        name = "usecase.rename_document.execute",
        skip(self),
        fields(storage_key = %key)
    )]
    pub async fn execute(
        &self,
        key: &StorageKey,
        new_name: &str,
    ) -> Result<RenameOutcome, DocumentError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Ok(RenameOutcome::Unchanged);
        }
        if new_name.contains('/') || new_name.contains('\\') {
            let err = DocumentError::InvalidName(new_name.to_string());
            self.notices.notify(err.notice());
            return Err(err);
        }

        let target = rename_target_key(key, new_name);
        if &target == key {
            return Ok(RenameOutcome::Unchanged);
        }

        let Some(namespace) = self.identity.current_namespace().await else {
            warn!("rename requested without a signed-in user");
            return Err(DocumentError::AuthRequired);
        };

        let from = namespace.path(key);
        let to = namespace.path(&target);
        match self.storage.move_object(&from, &to).await {
            Ok(()) => {
                info!(from = %from, to = %to, "Renamed document");
                self.notices
                    .notify(Notice::affirmative("File renamed successfully!"));
                Ok(RenameOutcome::Renamed { to: target })
            }
            Err(e) => {
                error!(from = %from, to = %to, error = %e, "Rename failed");
                let err = DocumentError::RenameFailed(e.to_string());
                self.notices.notify(err.notice());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixedIdentity, MockStorage, RecordingNotices};
    use dv_core::ports::StorageError;

    fn use_case(storage: MockStorage, notices: Arc<RecordingNotices>) -> RenameDocument {
        RenameDocument::from_ports(
            IdentityContext::new(Arc::new(FixedIdentity::signed_in("user-1"))),
            Arc::new(storage),
            notices,
        )
    }

    #[tokio::test]
    async fn test_rename_keeps_timestamp_prefix() {
        let mut storage = MockStorage::new();
        storage
            .expect_move_object()
            .withf(|from, to| {
                from.to_string() == "user-1/1700000000000-report.pdf"
                    && to.to_string() == "user-1/1700000000000-summary.pdf"
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let notices = Arc::new(RecordingNotices::default());

        let outcome = use_case(storage, notices.clone())
            .execute(&StorageKey::from("1700000000000-report.pdf"), "summary.pdf")
            .await
            .unwrap();

        assert_eq!(
            outcome,
            RenameOutcome::Renamed {
                to: StorageKey::from("1700000000000-summary.pdf")
            }
        );
        assert_eq!(notices.messages(), vec!["File renamed successfully!"]);
    }

    #[tokio::test]
    async fn test_blank_or_same_name_is_a_no_op() {
        let mut storage = MockStorage::new();
        storage.expect_move_object().never();
        let notices = Arc::new(RecordingNotices::default());
        let uc = use_case(storage, notices.clone());
        let key = StorageKey::from("1700000000000-report.pdf");

        assert_eq!(uc.execute(&key, "   ").await.unwrap(), RenameOutcome::Unchanged);
        assert_eq!(uc.execute(&key, "report.pdf").await.unwrap(), RenameOutcome::Unchanged);
        assert!(notices.all().is_empty());
    }

    #[tokio::test]
    async fn test_separator_in_name_is_refused() {
        let mut storage = MockStorage::new();
        storage.expect_move_object().never();
        let notices = Arc::new(RecordingNotices::default());

        let err = use_case(storage, notices.clone())
            .execute(&StorageKey::from("1-a.pdf"), "../b.pdf")
            .await
            .unwrap_err();

        assert!(matches!(err, DocumentError::InvalidName(_)));
        assert_eq!(notices.all().len(), 1);
    }

    #[tokio::test]
    async fn test_existing_target_surfaces_as_rename_failed() {
        let mut storage = MockStorage::new();
        storage
            .expect_move_object()
            .returning(|_, to| Err(StorageError::AlreadyExists(to.to_string())));
        let notices = Arc::new(RecordingNotices::default());

        let err = use_case(storage, notices.clone())
            .execute(&StorageKey::from("1-a.pdf"), "b.pdf")
            .await
            .unwrap_err();

        assert!(matches!(err, DocumentError::RenameFailed(_)));
        assert!(notices.messages()[0].starts_with("Rename failed: "));
    }
}
