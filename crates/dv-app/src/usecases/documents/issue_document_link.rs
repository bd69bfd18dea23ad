use std::sync::Arc;

use dv_core::ids::StorageKey;
use dv_core::links::{LinkPolicy, LinkPurpose, SignedUrl};
use dv_core::notice::Notice;
use dv_core::ports::{NoticePort, ObjectStoragePort};
use tracing::{error, warn};

use crate::error::DocumentError;
use crate::identity::IdentityContext;

/// Use case for issuing a signed URL for one document
/// 为单个文档签发临时链接的用例
pub struct IssueDocumentLink {
    identity: IdentityContext,
    storage: Arc<dyn ObjectStoragePort>,
    notices: Arc<dyn NoticePort>,
    policy: LinkPolicy,
}

impl IssueDocumentLink {
    pub fn from_ports(
        identity: IdentityContext,
        storage: Arc<dyn ObjectStoragePort>,
        notices: Arc<dyn NoticePort>,
        policy: LinkPolicy,
    ) -> Self {
        Self {
            identity,
            storage,
            notices,
            policy,
        }
    }

    /// Issues a link whose lifetime depends on `purpose`.
    ///
    /// Only a share link announces itself on success. Every failure is
    /// announced with a purpose-specific message.
    #[tracing::instrument(
        name = "usecase.issue_document_link.execute",
        skip(self),
        fields(storage_key = %key, purpose = %purpose)
    )]
    pub async fn execute(
        &self,
        key: &StorageKey,
        purpose: LinkPurpose,
    ) -> Result<SignedUrl, DocumentError> {
        let Some(namespace) = self.identity.current_namespace().await else {
            warn!("link requested without a signed-in user");
            return Err(DocumentError::AuthRequired);
        };

        let path = namespace.path(key);
        let ttl = self.policy.ttl_for(purpose);
        match self.storage.create_signed_url(&path, ttl).await {
            Ok(url) => {
                if purpose == LinkPurpose::Share {
                    self.notices
                        .notify(Notice::affirmative("Shareable link copied to clipboard!"));
                }
                Ok(url)
            }
            Err(e) => {
                error!(path = %path, error = %e, "Failed to create signed url");
                let err = DocumentError::ShareLinkFailed {
                    purpose,
                    reason: e.to_string(),
                };
                self.notices.notify(err.notice());
                Err(err)
            }
        }
    }
}
