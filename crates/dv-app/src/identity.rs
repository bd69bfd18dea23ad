//! Identity context
//! 身份上下文
//!
//! Explicit handle on the identity provider that is passed into every
//! session and use case that needs a user, instead of reading a global.

use std::sync::Arc;

use dv_core::ids::{Namespace, UserId};
use dv_core::ports::{IdentityPort, SessionEvent};
use tokio::sync::mpsc;
use tracing::warn;

#[derive(Clone)]
pub struct IdentityContext {
    port: Arc<dyn IdentityPort>,
}

impl IdentityContext {
    pub fn new(port: Arc<dyn IdentityPort>) -> Self {
        Self { port }
    }

    /// Signed-in user, or `None`.
    ///
    /// A provider failure is treated as "no session": nothing is attempted
    /// against storage without a confirmed identity.
    pub async fn current_user(&self) -> Option<UserId> {
        match self.port.current_user().await {
            Ok(user) => user,
            Err(err) => {
                warn!(error = %err, "identity provider lookup failed");
                None
            }
        }
    }

    pub async fn current_namespace(&self) -> Option<Namespace> {
        self.current_user()
            .await
            .map(|user| Namespace::for_user(&user))
    }

    pub async fn subscribe(&self) -> anyhow::Result<mpsc::Receiver<SessionEvent>> {
        self.port.subscribe_session_changes().await
    }

    pub async fn sign_in(&self, user: UserId) -> anyhow::Result<()> {
        self.port.sign_in(user).await
    }

    pub async fn sign_out(&self) -> anyhow::Result<()> {
        self.port.sign_out().await
    }
}
