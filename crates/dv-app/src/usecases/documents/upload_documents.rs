use std::sync::Arc;

use dv_core::document::storage_key_for_upload;
use dv_core::ids::StorageKey;
use dv_core::notice::Notice;
use dv_core::ports::{ClockPort, NoticePort, ObjectStoragePort, UploadOptions};
use tracing::{error, info, warn};

use crate::error::DocumentError;
use crate::identity::IdentityContext;

/// One file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Per-file result of an upload batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub file_name: String,
    pub result: Result<StorageKey, DocumentError>,
}

/// Use case for uploading a batch of files
/// 批量上传文件的用例
///
/// Each file is stored under `{now_ms}-{name}` with overwrite enabled. Files
/// are independent: one failure does not stop the rest of the batch.
pub struct UploadDocuments {
    identity: IdentityContext,
    storage: Arc<dyn ObjectStoragePort>,
    notices: Arc<dyn NoticePort>,
    clock: Arc<dyn ClockPort>,
}

impl UploadDocuments {
    pub fn from_ports(
        identity: IdentityContext,
        storage: Arc<dyn ObjectStoragePort>,
        notices: Arc<dyn NoticePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            identity,
            storage,
            notices,
            clock,
        }
    }

    #[tracing::instrument(
        name = "usecase.upload_documents.execute",
        skip(self, files),
        fields(file_count = files.len())
    )]
    pub async fn execute(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<Vec<UploadOutcome>, DocumentError> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let Some(namespace) = self.identity.current_namespace().await else {
            warn!("upload requested without a signed-in user");
            return Err(DocumentError::AuthRequired);
        };

        let mut outcomes = Vec::with_capacity(files.len());
        let mut last_ms = i64::MIN;
        for file in files {
            // Keys in one batch must not collide even when the clock does not move.
            let now_ms = self.clock.now_ms().max(last_ms.saturating_add(1));
            last_ms = now_ms;

            let key = storage_key_for_upload(now_ms, &file.name);
            let path = namespace.path(&key);
            let size = file.bytes.len();
            let result = match self
                .storage
                .upload(&path, file.bytes, UploadOptions { overwrite: true })
                .await
            {
                Ok(()) => {
                    info!(path = %path, size, "Uploaded document");
                    Ok(key)
                }
                Err(e) => {
                    error!(path = %path, error = %e, "Upload failed");
                    Err(DocumentError::UploadFailed {
                        file: file.name.clone(),
                        reason: e.to_string(),
                    })
                }
            };
            outcomes.push(UploadOutcome {
                file_name: file.name,
                result,
            });
        }

        let failed: Vec<&str> = outcomes
            .iter()
            .filter(|o| o.result.is_err())
            .map(|o| o.file_name.as_str())
            .collect();
        if failed.is_empty() {
            self.notices
                .notify(Notice::affirmative("Files uploaded successfully!"));
        } else {
            self.notices.notify(Notice::negative(format!(
                "Upload failed for: {}",
                failed.join(", ")
            )));
        }

        Ok(outcomes)
    }
}
