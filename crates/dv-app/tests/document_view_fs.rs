//! End-to-end document view over the filesystem adapters.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use dv_app::usecases::{
    DownloadDocument, GetProfile, IssueDocumentLink, RenameOutcome, SignOut, UpdateProfile,
    UpdateProfilePicture, UploadDocuments, UploadFile,
};
use dv_app::{DocumentError, DocumentViewSession, IdentityContext, ProfileError};
use dv_core::ids::{StorageKey, UserId};
use dv_core::links::{LinkPolicy, LinkPurpose};
use dv_core::ports::{ClockPort, IdentityPort, ObjectStoragePort};
use dv_core::profile::{Profile, ProfileUpdate};
use dv_core::view::{SortOption, ViewState};
use dv_infra::{
    ClockedNoticeBoard, FileProfileRepository, FsObjectStorage, LocalIdentity, SystemClock,
    UrlSigner,
};

struct Harness {
    identity: Arc<LocalIdentity>,
    documents: Arc<FsObjectStorage>,
    pictures: Arc<FsObjectStorage>,
    notices: Arc<ClockedNoticeBoard>,
    clock: Arc<dyn ClockPort>,
}

impl Harness {
    fn new(root: &Path) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("dv_app=debug,dv_infra=debug")
            .with_test_writer()
            .try_init();

        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
        let signer = Arc::new(UrlSigner::new("http://localhost:8080/storage/v1", "s3cret").unwrap());
        Self {
            identity: Arc::new(LocalIdentity::new(Some(UserId::from("user-1")))),
            documents: Arc::new(FsObjectStorage::new(
                root.to_path_buf(),
                "documents",
                signer.clone(),
                clock.clone(),
            )),
            pictures: Arc::new(FsObjectStorage::new(
                root.to_path_buf(),
                "profile",
                signer,
                clock.clone(),
            )),
            notices: Arc::new(ClockedNoticeBoard::new(60_000, clock.clone())),
            clock,
        }
    }

    fn identity(&self) -> IdentityContext {
        IdentityContext::new(self.identity.clone())
    }

    fn session(&self) -> Arc<DocumentViewSession> {
        DocumentViewSession::new(self.identity(), self.documents.clone(), self.notices.clone())
    }

    fn uploader(&self) -> UploadDocuments {
        UploadDocuments::from_ports(
            self.identity(),
            self.documents.clone(),
            self.notices.clone(),
            self.clock.clone(),
        )
    }

    fn links(&self) -> IssueDocumentLink {
        IssueDocumentLink::from_ports(
            self.identity(),
            self.documents.clone(),
            self.notices.clone(),
            LinkPolicy::defaults(),
        )
    }

    fn last_notice(&self) -> String {
        self.notices
            .current()
            .map(|n| n.message)
            .unwrap_or_default()
    }
}

fn upload(name: &str, body: &str) -> UploadFile {
    UploadFile {
        name: name.to_string(),
        bytes: body.as_bytes().to_vec(),
    }
}

fn names(state: &ViewState) -> Vec<String> {
    state
        .displayed_entries()
        .iter()
        .map(|e| e.display_name().to_string())
        .collect()
}

async fn wait_for<F>(session: &DocumentViewSession, mut done: F) -> ViewState
where
    F: FnMut(&ViewState) -> bool,
{
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let state = session.snapshot().await;
            if done(&state) {
                return state;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("view did not reach the expected state")
}

#[tokio::test]
async fn upload_list_rename_delete_round() {
    let dir = tempfile::tempdir().unwrap();
    let h = Harness::new(dir.path());

    let outcomes = h
        .uploader()
        .execute(vec![
            upload("Report.pdf", "r1"),
            upload("notes.txt", "n"),
            upload("report.pdf", "r2"),
        ])
        .await
        .unwrap();
    assert!(outcomes.iter().all(|o| o.result.is_ok()));
    assert_eq!(h.last_notice(), "Files uploaded successfully!");

    let session = h.session();
    session.refresh().await.unwrap();
    session.set_search_query("REP").await;
    session.set_sort_option(SortOption::NameAscending).await;
    let state = session.snapshot().await;
    assert_eq!(state.displayed_entries().len(), 2);
    assert!(names(&state).iter().all(|n| n.eq_ignore_ascii_case("report.pdf")));

    // Delete the second "report.pdf" by key; its twin stays.
    let doomed = outcomes[2].result.clone().unwrap();
    let survivor = outcomes[0].result.clone().unwrap();
    session.delete(&doomed).await.unwrap();
    assert_eq!(h.last_notice(), "File deleted successfully!");
    let state = session.snapshot().await;
    assert_eq!(state.displayed_entries().len(), 1);
    assert_eq!(state.displayed_entries()[0].storage_key, survivor);

    let renamed = session.rename(&survivor, "annual-report.pdf").await.unwrap();
    let RenameOutcome::Renamed { to } = renamed else {
        panic!("expected a rename");
    };
    assert!(to.as_str().ends_with("-annual-report.pdf"));
    assert_eq!(names(&session.snapshot().await), vec!["annual-report.pdf"]);

    // A fresh listing agrees with the locally reconciled view.
    session.set_search_query("").await;
    session.refresh().await.unwrap();
    let mut listed = names(&session.snapshot().await);
    listed.sort();
    assert_eq!(listed, vec!["annual-report.pdf", "notes.txt"]);
}

#[tokio::test]
async fn delete_of_missing_object_keeps_view() {
    let dir = tempfile::tempdir().unwrap();
    let h = Harness::new(dir.path());
    h.uploader()
        .execute(vec![upload("a.pdf", "a")])
        .await
        .unwrap();

    let session = h.session();
    session.refresh().await.unwrap();
    let err = session
        .delete(&StorageKey::from("1-not-there.pdf"))
        .await
        .unwrap_err();

    assert!(matches!(err, DocumentError::DeleteFailed(_)));
    assert!(h.last_notice().starts_with("Delete failed: "));
    assert_eq!(session.snapshot().await.displayed_entries().len(), 1);
}

#[tokio::test]
async fn download_goes_through_signed_link() {
    let dir = tempfile::tempdir().unwrap();
    let h = Harness::new(dir.path());
    let outcomes = h
        .uploader()
        .execute(vec![upload("scan.pdf", "%PDF-1.7")])
        .await
        .unwrap();
    let key = outcomes[0].result.clone().unwrap();

    let share = h.links().execute(&key, LinkPurpose::Share).await.unwrap();
    assert!(share.url.contains("/object/sign/documents/user-1/"));
    assert_eq!(h.last_notice(), "Shareable link copied to clipboard!");

    let download = DownloadDocument::new(h.links(), h.documents.clone(), h.notices.clone());
    let doc = download.execute(&key).await.unwrap();
    assert_eq!(doc.file_name, "scan.pdf");
    assert_eq!(doc.bytes, b"%PDF-1.7");
}

#[tokio::test]
async fn session_changes_refresh_the_open_view() {
    let dir = tempfile::tempdir().unwrap();
    let h = Harness::new(dir.path());
    h.uploader()
        .execute(vec![upload("a.pdf", "a")])
        .await
        .unwrap();

    let session = h.session();
    session.refresh().await.unwrap();
    let watcher = session.watch_session_changes().await.unwrap();

    SignOut::new(h.identity()).execute().await.unwrap();
    wait_for(&session, |s| s.displayed_entries().is_empty()).await;
    assert_eq!(session.refresh().await, Err(DocumentError::AuthRequired));

    h.identity.sign_in(UserId::from("user-1")).await.unwrap();
    let state = wait_for(&session, |s| s.displayed_entries().len() == 1).await;
    assert_eq!(names(&state), vec!["a.pdf"]);

    // Another user sees their own, empty namespace.
    h.identity.sign_in(UserId::from("user-2")).await.unwrap();
    wait_for(&session, |s| s.displayed_entries().is_empty()).await;

    session.close().await;
    drop(session);
    h.identity.sign_out().await.unwrap();
    tokio::time::timeout(Duration::from_secs(5), watcher)
        .await
        .expect("watcher should stop once the session is gone")
        .unwrap();
}

#[tokio::test]
async fn profile_edit_and_picture() {
    let dir = tempfile::tempdir().unwrap();
    let h = Harness::new(dir.path());
    let profiles = Arc::new(FileProfileRepository::new(dir.path().join("users.json")));
    profiles
        .upsert(Profile {
            id: Some(UserId::from("user-1")),
            full_name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            ..Profile::default()
        })
        .await
        .unwrap();

    UpdateProfile::from_ports(h.identity(), profiles.clone(), h.notices.clone())
        .execute(ProfileUpdate {
            username: Some("asha".into()),
            ..ProfileUpdate::default()
        })
        .await
        .unwrap();
    assert_eq!(h.last_notice(), "Profile updated successfully");

    let url = UpdateProfilePicture::from_ports(
        h.identity(),
        h.pictures.clone(),
        profiles.clone(),
        h.notices.clone(),
    )
    .execute("me.png", vec![0x89, b'P', b'N', b'G'])
    .await
    .unwrap();
    assert_eq!(
        url,
        "http://localhost:8080/storage/v1/object/public/profile/user-1/me.png"
    );
    assert_eq!(h.last_notice(), "Profile picture updated successfully");

    let profile = GetProfile::from_ports(h.identity(), profiles.clone(), h.notices.clone())
        .execute()
        .await
        .unwrap();
    assert_eq!(profile.username, "asha");
    assert_eq!(profile.full_name, "Asha Rao");
    assert_eq!(profile.profile_picture, url);

    // Pictures live in their own bucket and never show up as documents.
    let session = h.session();
    session.refresh().await.unwrap();
    assert!(session.snapshot().await.displayed_entries().is_empty());
    assert!(h
        .pictures
        .list(&dv_core::ids::Namespace::for_user(&UserId::from("user-1")))
        .await
        .unwrap()
        .iter()
        .any(|e| e.storage_key.as_str() == "me.png"));

    h.identity.sign_out().await.unwrap();
    let err = GetProfile::from_ports(h.identity(), profiles, h.notices.clone())
        .execute()
        .await
        .unwrap_err();
    assert_eq!(err, ProfileError::AuthRequired);
}
