//! Document use cases
//! 文档用例

mod delete_document;
mod download_document;
mod issue_document_link;
mod list_documents;
mod rename_document;
mod upload_documents;

pub use delete_document::DeleteDocument;
pub use download_document::{DownloadDocument, DownloadedDocument};
pub use issue_document_link::IssueDocumentLink;
pub use list_documents::ListDocuments;
pub use rename_document::{RenameDocument, RenameOutcome};
pub use upload_documents::{UploadDocuments, UploadFile, UploadOutcome};
