//! Business logic use cases
//! 业务用例
//!
//! [DocumentViewSession]
//         ↓
// ListDocuments                 → 视图刷新
// DeleteDocument / RenameDocument → 远端确认后再改本地状态
// ---------------------------------
// UploadDocuments / IssueDocumentLink / DownloadDocument
// GetProfile / UpdateProfile / UpdateProfilePicture / SignIn / SignOut

pub mod documents;
pub mod profile;
mod sign_in;
mod sign_out;

pub use documents::{
    DeleteDocument, DownloadDocument, DownloadedDocument, IssueDocumentLink, ListDocuments,
    RenameDocument, RenameOutcome, UploadDocuments, UploadFile, UploadOutcome,
};
pub use profile::{GetProfile, UpdateProfile, UpdateProfilePicture};
pub use sign_in::SignIn;
pub use sign_out::SignOut;
