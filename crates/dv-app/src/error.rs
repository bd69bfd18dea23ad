//! Error taxonomy for document and profile use cases
//! 文档与资料用例的错误分类

use dv_core::links::LinkPurpose;
use dv_core::notice::Notice;

/// Failure of a document operation.
///
/// Every variant is recoverable: the caller shows [`DocumentError::notice`]
/// and the view keeps working.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("No signed-in user")]
    AuthRequired,

    #[error("Error fetching documents: {0}")]
    ListingFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Rename failed: {0}")]
    RenameFailed(String),

    #[error("Upload failed for {file}: {reason}")]
    UploadFailed { file: String, reason: String },

    #[error("{} {reason}", share_link_prefix(.purpose))]
    ShareLinkFailed { purpose: LinkPurpose, reason: String },

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Document view is closed")]
    SessionClosed,
}

fn share_link_prefix(purpose: &LinkPurpose) -> &'static str {
    match purpose {
        LinkPurpose::Preview => "Preview failed:",
        LinkPurpose::Download => "Download failed:",
        LinkPurpose::Share => "Error generating shareable link:",
    }
}

impl DocumentError {
    /// The negative notice shown for this failure.
    pub fn notice(&self) -> Notice {
        Notice::negative(self.to_string())
    }
}

/// Failure of a profile operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("No signed-in user")]
    AuthRequired,

    #[error("Profile not found")]
    NotFound,

    #[error("Failed to fetch profile")]
    FetchFailed(String),

    #[error("Failed to update profile")]
    UpdateFailed(String),

    #[error("Failed to upload image")]
    PictureUploadFailed(String),

    #[error("Failed to update profile picture in database")]
    PictureSaveFailed(String),
}

impl ProfileError {
    pub fn notice(&self) -> Notice {
        Notice::negative(self.to_string())
    }
}
