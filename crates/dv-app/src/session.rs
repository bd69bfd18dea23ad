//! Document view session
//! 文档视图会话
//!
//! One session owns one [`ViewState`]. Remote calls never run while the
//! state lock is held: a refresh takes a [`RefreshTicket`] under the lock,
//! releases it for the listing call, then re-locks to apply the result only if
//! the ticket is still current and the session is still open.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dv_core::ids::StorageKey;
use dv_core::ports::{NoticePort, ObjectStoragePort};
use dv_core::view::{RefreshOutcome, SortOption, ViewState};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::DocumentError;
use crate::identity::IdentityContext;
use crate::usecases::{DeleteDocument, ListDocuments, RenameDocument, RenameOutcome};

pub struct DocumentViewSession {
    identity: IdentityContext,
    listing: ListDocuments,
    deleter: DeleteDocument,
    renamer: RenameDocument,
    notices: Arc<dyn NoticePort>,
    state: Mutex<ViewState>,
    closed: AtomicBool,
}

impl DocumentViewSession {
    /// Creates a session in the `Loading` phase without fetching anything.
    pub fn new(
        identity: IdentityContext,
        storage: Arc<dyn ObjectStoragePort>,
        notices: Arc<dyn NoticePort>,
    ) -> Arc<Self> {
        Arc::new(Self {
            listing: ListDocuments::from_port(storage.clone()),
            deleter: DeleteDocument::from_ports(identity.clone(), storage.clone(), notices.clone()),
            renamer: RenameDocument::from_ports(identity.clone(), storage, notices.clone()),
            identity,
            notices,
            state: Mutex::new(ViewState::new()),
            closed: AtomicBool::new(false),
        })
    }

    /// Creates a session and runs its first refresh.
    ///
    /// A failed first listing is already reflected in the state and in the
    /// notices, so the session is returned either way.
    pub async fn open(
        identity: IdentityContext,
        storage: Arc<dyn ObjectStoragePort>,
        notices: Arc<dyn NoticePort>,
    ) -> Arc<Self> {
        let session = Self::new(identity, storage, notices);
        if let Err(err) = session.refresh().await {
            debug!(error = %err, "initial document listing failed");
        }
        session
    }

    /// Re-fetches the listing for the current user and replaces the raw
    /// entries wholesale.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::AuthRequired`] without a signed-in user. Storage is
    ///   not contacted and the view is cleared.
    /// - [`DocumentError::ListingFailed`] when storage fails. The view becomes
    ///   ready and empty and one notice is emitted.
    ///
    /// A result that was overtaken by a later refresh, or that arrives after
    /// [`close`](Self::close), is dropped and reported as
    /// [`RefreshOutcome::Stale`].
    #[tracing::instrument(name = "session.refresh", skip(self))]
    pub async fn refresh(&self) -> Result<RefreshOutcome, DocumentError> {
        if self.is_closed() {
            return Ok(RefreshOutcome::Stale);
        }
        let ticket = self.state.lock().await.begin_refresh();

        let Some(namespace) = self.identity.current_namespace().await else {
            warn!("refresh requested without a signed-in user");
            if !self.is_closed() {
                self.state.lock().await.fail_refresh(ticket);
            }
            return Err(DocumentError::AuthRequired);
        };

        let result = self.listing.execute(&namespace).await;

        if self.is_closed() {
            debug!(generation = ticket.generation(), "dropping listing that arrived after close");
            return Ok(RefreshOutcome::Stale);
        }

        let mut state = self.state.lock().await;
        match result {
            Ok(entries) => {
                let outcome = state.complete_refresh(ticket, entries);
                if outcome == RefreshOutcome::Stale {
                    debug!(generation = ticket.generation(), "dropping stale listing");
                }
                Ok(outcome)
            }
            Err(err) => {
                if state.fail_refresh(ticket) == RefreshOutcome::Stale {
                    debug!(generation = ticket.generation(), "dropping stale listing failure");
                    return Ok(RefreshOutcome::Stale);
                }
                drop(state);
                self.notices.notify(err.notice());
                Err(err)
            }
        }
    }

    pub async fn set_search_query(&self, query: impl Into<String>) {
        if self.is_closed() {
            return;
        }
        self.state.lock().await.set_search_query(query);
    }

    pub async fn set_sort_option(&self, sort_option: SortOption) {
        if self.is_closed() {
            return;
        }
        self.state.lock().await.set_sort_option(sort_option);
    }

    /// A copy of the current view state.
    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    /// Drops the entry stored under `key` from the local view, without a
    /// re-fetch. Returns whether an entry was removed.
    pub async fn confirm_delete(&self, key: &StorageKey) -> bool {
        if self.is_closed() {
            return false;
        }
        self.state.lock().await.remove_entry(key).is_some()
    }

    /// Deletes the object remotely, then drops it locally.
    ///
    /// The local view is only touched after storage confirms the deletion.
    pub async fn delete(&self, key: &StorageKey) -> Result<(), DocumentError> {
        if self.is_closed() {
            return Err(DocumentError::SessionClosed);
        }
        self.deleter.execute(key).await?;
        if !self.confirm_delete(key).await {
            debug!(storage_key = %key, "deleted object was not in the local view");
        }
        Ok(())
    }

    /// Renames the object remotely, then re-keys the local entry in place.
    pub async fn rename(
        &self,
        key: &StorageKey,
        new_name: &str,
    ) -> Result<RenameOutcome, DocumentError> {
        if self.is_closed() {
            return Err(DocumentError::SessionClosed);
        }
        let outcome = self.renamer.execute(key, new_name).await?;
        if let RenameOutcome::Renamed { to } = &outcome {
            if !self.is_closed() {
                self.state.lock().await.rename_entry(key, to.clone());
            }
        }
        Ok(outcome)
    }

    /// Tears the session down. In-flight results are dropped and later calls
    /// do nothing.
    pub async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.state.lock().await.reset();
        info!("document view closed");
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Refreshes the view on every identity change until the session is
    /// closed or dropped.
    ///
    /// The spawned task only holds a weak reference to the session.
    pub async fn watch_session_changes(self: &Arc<Self>) -> anyhow::Result<JoinHandle<()>> {
        let mut events = self.identity.subscribe().await?;
        let weak = Arc::downgrade(self);

        Ok(tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                let Some(session) = weak.upgrade() else {
                    break;
                };
                if session.is_closed() {
                    break;
                }
                debug!(
                    user_id = event.user().map(|u| u.as_str()).unwrap_or("<signed out>"),
                    "session changed, refreshing document view"
                );
                if let Err(err) = session.refresh().await {
                    debug!(error = %err, "refresh after session change failed");
                }
            }
            debug!("session watcher stopped");
        }))
    }
}
