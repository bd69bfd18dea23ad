use std::sync::Arc;

use dv_core::document::display_name;
use dv_core::ids::StorageKey;
use dv_core::links::LinkPurpose;
use dv_core::ports::{NoticePort, ObjectFetchPort};
use tracing::{error, info};

use super::IssueDocumentLink;
use crate::error::DocumentError;

/// Bytes of a downloaded document with the name it should be saved as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Use case for downloading a document through a short-lived signed URL
/// 通过短期签名链接下载文档的用例
pub struct DownloadDocument {
    links: IssueDocumentLink,
    fetcher: Arc<dyn ObjectFetchPort>,
    notices: Arc<dyn NoticePort>,
}

impl DownloadDocument {
    pub fn new(
        links: IssueDocumentLink,
        fetcher: Arc<dyn ObjectFetchPort>,
        notices: Arc<dyn NoticePort>,
    ) -> Self {
        Self {
            links,
            fetcher,
            notices,
        }
    }

    #[tracing::instrument(
        name = "usecase.download_document.execute",
        skip(self),
        fields(storage_key = %key)
    )]
    pub async fn execute(&self, key: &StorageKey) -> Result<DownloadedDocument, DocumentError> {
        let url = self.links.execute(key, LinkPurpose::Download).await?;

        let bytes = self.fetcher.fetch(&url).await.map_err(|e| {
            error!(error = %e, "Download failed");
            let err = DocumentError::ShareLinkFailed {
                purpose: LinkPurpose::Download,
                reason: e.to_string(),
            };
            self.notices.notify(err.notice());
            err
        })?;

        info!(bytes = bytes.len(), "Downloaded document");
        Ok(DownloadedDocument {
            file_name: display_name(key.as_str()).to_string(),
            bytes,
        })
    }
}
