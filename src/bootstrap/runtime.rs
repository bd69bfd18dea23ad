//! # Application Runtime / 应用运行时
//!
//! Owns the wired dependencies and hands out use cases on demand.
//! 持有已装配的依赖，并按需提供用例。

use std::sync::Arc;

use dv_app::usecases::{
    DeleteDocument, DownloadDocument, GetProfile, IssueDocumentLink, ListDocuments,
    RenameDocument, SignIn, SignOut, UpdateProfile, UpdateProfilePicture, UploadDocuments,
};
use dv_app::{AppDeps, DocumentViewSession, IdentityContext};
use dv_core::notice::Notice;
use dv_infra::ClockedNoticeBoard;

use super::wiring::WiredDependencies;

pub struct AppRuntime {
    /// Application dependencies
    pub deps: AppDeps,
    notices: Arc<ClockedNoticeBoard>,
}

impl AppRuntime {
    pub fn new(wired: WiredDependencies) -> Self {
        Self {
            deps: wired.deps,
            notices: wired.notices,
        }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }

    /// Outcome of the last operation, regardless of how long ago it was shown.
    pub fn last_notice(&self) -> Option<Notice> {
        self.notices.latest()
    }

    fn identity(&self) -> IdentityContext {
        IdentityContext::new(self.deps.identity.clone())
    }
}

/// Use case accessor for AppRuntime
/// AppRuntime 的用例访问器
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    /// Create a new UseCases accessor from AppRuntime.
    /// 从 AppRuntime 创建新的 UseCases 访问器。
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    /// Creates a document view in the `Loading` phase. The caller decides
    /// when to refresh it.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use docvault_lib::bootstrap::AppRuntime;
    /// # async fn example(runtime: &AppRuntime) -> anyhow::Result<()> {
    /// let session = runtime.usecases().document_view();
    /// session.refresh().await?;
    /// let state = session.snapshot().await;
    /// println!("{} documents", state.displayed_entries().len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn document_view(&self) -> Arc<DocumentViewSession> {
        let deps = &self.runtime.deps;
        DocumentViewSession::new(
            self.runtime.identity(),
            deps.documents.clone(),
            deps.notices.clone(),
        )
    }

    pub fn list_documents(&self) -> ListDocuments {
        ListDocuments::from_port(self.runtime.deps.documents.clone())
    }

    pub fn delete_document(&self) -> DeleteDocument {
        let deps = &self.runtime.deps;
        DeleteDocument::from_ports(
            self.runtime.identity(),
            deps.documents.clone(),
            deps.notices.clone(),
        )
    }

    pub fn rename_document(&self) -> RenameDocument {
        let deps = &self.runtime.deps;
        RenameDocument::from_ports(
            self.runtime.identity(),
            deps.documents.clone(),
            deps.notices.clone(),
        )
    }

    pub fn issue_document_link(&self) -> IssueDocumentLink {
        let deps = &self.runtime.deps;
        IssueDocumentLink::from_ports(
            self.runtime.identity(),
            deps.documents.clone(),
            deps.notices.clone(),
            deps.links,
        )
    }

    pub fn download_document(&self) -> DownloadDocument {
        let deps = &self.runtime.deps;
        DownloadDocument::new(
            self.issue_document_link(),
            deps.fetcher.clone(),
            deps.notices.clone(),
        )
    }

    pub fn upload_documents(&self) -> UploadDocuments {
        let deps = &self.runtime.deps;
        UploadDocuments::from_ports(
            self.runtime.identity(),
            deps.documents.clone(),
            deps.notices.clone(),
            deps.clock.clone(),
        )
    }

    pub fn get_profile(&self) -> GetProfile {
        let deps = &self.runtime.deps;
        GetProfile::from_ports(
            self.runtime.identity(),
            deps.profiles.clone(),
            deps.notices.clone(),
        )
    }

    pub fn update_profile(&self) -> UpdateProfile {
        let deps = &self.runtime.deps;
        UpdateProfile::from_ports(
            self.runtime.identity(),
            deps.profiles.clone(),
            deps.notices.clone(),
        )
    }

    pub fn update_profile_picture(&self) -> UpdateProfilePicture {
        let deps = &self.runtime.deps;
        UpdateProfilePicture::from_ports(
            self.runtime.identity(),
            deps.profile_pictures.clone(),
            deps.profiles.clone(),
            deps.notices.clone(),
        )
    }

    pub fn sign_in(&self) -> SignIn {
        SignIn::new(self.runtime.identity())
    }

    pub fn sign_out(&self) -> SignOut {
        SignOut::new(self.runtime.identity())
    }
}
