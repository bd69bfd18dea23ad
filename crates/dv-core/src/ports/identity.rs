//! Identity port - abstracts the authentication provider
//!
//! The provider owns the session. Use cases only ask who is signed in and
//! listen for changes; they never hold the session themselves.

use anyhow::Result;
use async_trait::async_trait;

use crate::ids::UserId;

/// Session change reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(UserId),
    SignedOut,
}

impl SessionEvent {
    pub fn user(&self) -> Option<&UserId> {
        match self {
            SessionEvent::SignedIn(user) => Some(user),
            SessionEvent::SignedOut => None,
        }
    }
}

#[async_trait]
pub trait IdentityPort: Send + Sync {
    /// Currently signed-in user, `None` when there is no session.
    async fn current_user(&self) -> Result<Option<UserId>>;

    /// Subscribe to session changes.
    ///
    /// Returns a receiver that yields one event per sign-in or sign-out.
    /// The stream ends when the provider shuts down.
    async fn subscribe_session_changes(&self) -> Result<tokio::sync::mpsc::Receiver<SessionEvent>>;

    /// Start a session for `user`, replacing any current one.
    async fn sign_in(&self, user: UserId) -> Result<()>;

    /// End the current session.
    async fn sign_out(&self) -> Result<()>;
}
