//! Shared mocks for use-case unit tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use dv_core::document::DocumentEntry;
use dv_core::ids::{Namespace, ObjectPath, UserId};
use dv_core::links::SignedUrl;
use dv_core::notice::Notice;
use dv_core::ports::{
    ClockPort, IdentityPort, NoticePort, ObjectStoragePort, SessionEvent, StorageError,
    UploadOptions,
};
use mockall::mock;

mock! {
    pub Storage {}

    #[async_trait]
    impl ObjectStoragePort for Storage {
        async fn list(&self, namespace: &Namespace) -> Result<Vec<DocumentEntry>, StorageError>;
        async fn remove(&self, path: &ObjectPath) -> Result<(), StorageError>;
        async fn create_signed_url(
            &self,
            path: &ObjectPath,
            ttl: Duration,
        ) -> Result<SignedUrl, StorageError>;
        async fn move_object(&self, from: &ObjectPath, to: &ObjectPath) -> Result<(), StorageError>;
        async fn upload(
            &self,
            path: &ObjectPath,
            bytes: Vec<u8>,
            options: UploadOptions,
        ) -> Result<(), StorageError>;
        fn public_url(&self, path: &ObjectPath) -> String;
    }
}

/// Identity provider with a fixed answer.
pub struct FixedIdentity(pub Option<UserId>);

impl FixedIdentity {
    pub fn signed_in(user: &str) -> Self {
        Self(Some(UserId::from(user)))
    }

    pub fn signed_out() -> Self {
        Self(None)
    }
}

#[async_trait]
impl IdentityPort for FixedIdentity {
    async fn current_user(&self) -> anyhow::Result<Option<UserId>> {
        Ok(self.0.clone())
    }

    async fn subscribe_session_changes(
        &self,
    ) -> anyhow::Result<tokio::sync::mpsc::Receiver<SessionEvent>> {
        let (_tx, rx) = tokio::sync::mpsc::channel(1);
        Ok(rx)
    }

    async fn sign_in(&self, _user: UserId) -> anyhow::Result<()> {
        Ok(())
    }

    async fn sign_out(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Notice sink that keeps everything it was given.
#[derive(Default)]
pub struct RecordingNotices {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotices {
    pub fn all(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.all().into_iter().map(|n| n.message).collect()
    }
}

impl NoticePort for RecordingNotices {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}
