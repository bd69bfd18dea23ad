use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;
use dv_core::ids::UserId;
use dv_core::ports::{IdentityPort, SessionEvent};
use tokio::fs;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info};

const SUBSCRIBER_BUFFER: usize = 16;

/// In-process identity provider.
/// 进程内身份提供方
///
/// Holds at most one signed-in user and fans session changes out to every
/// live subscriber. Subscribers whose receiver was dropped are pruned on the
/// next event.
///
/// With a session file the signed-in state survives restarts: the file holds
/// the user id, and an empty file records an explicit sign-out.
pub struct LocalIdentity {
    current: RwLock<Option<UserId>>,
    subscribers: Mutex<Vec<mpsc::Sender<SessionEvent>>>,
    session_file: Option<PathBuf>,
}

impl LocalIdentity {
    pub fn new(initial: Option<UserId>) -> Self {
        Self {
            current: RwLock::new(initial),
            subscribers: Mutex::new(Vec::new()),
            session_file: None,
        }
    }

    /// Restores the session recorded in `session_file`, or starts with
    /// `fallback` when no session was ever recorded.
    pub async fn restore(session_file: impl Into<PathBuf>, fallback: Option<UserId>) -> Result<Self> {
        let session_file = session_file.into();
        let current = match fs::read_to_string(&session_file).await {
            Ok(content) => {
                let user = content.trim();
                (!user.is_empty()).then(|| UserId::from(user))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => fallback,
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("read session file failed: {}", session_file.display())
                })
            }
        };
        debug!(signed_in = current.is_some(), "restored local session");
        Ok(Self {
            current: RwLock::new(current),
            subscribers: Mutex::new(Vec::new()),
            session_file: Some(session_file),
        })
    }

    async fn persist(&self, content: &str) -> Result<()> {
        let Some(path) = &self.session_file else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create session dir failed: {}", dir.display()))?;
        }
        fs::write(path, content)
            .await
            .with_context(|| format!("write session file failed: {}", path.display()))
    }

    fn publish(&self, event: SessionEvent) {
        let Ok(mut subscribers) = self.subscribers.lock() else {
            return;
        };
        subscribers.retain(|tx| match tx.try_send(event.clone()) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                debug!("session subscriber lagging; event dropped");
                true
            }
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        });
    }
}

#[async_trait]
impl IdentityPort for LocalIdentity {
    async fn current_user(&self) -> Result<Option<UserId>> {
        Ok(self.current.read().await.clone())
    }

    async fn subscribe_session_changes(&self) -> Result<mpsc::Receiver<SessionEvent>> {
        let (tx, rx) = mpsc::channel(SUBSCRIBER_BUFFER);
        self.subscribers
            .lock()
            .map_err(|_| anyhow::anyhow!("session subscriber list poisoned"))?
            .push(tx);
        Ok(rx)
    }

    async fn sign_in(&self, user: UserId) -> Result<()> {
        self.persist(user.as_str()).await?;
        *self.current.write().await = Some(user.clone());
        info!(user_id = %user, "signed in");
        self.publish(SessionEvent::SignedIn(user));
        Ok(())
    }

    async fn sign_out(&self) -> Result<()> {
        self.persist("").await?;
        let previous = self.current.write().await.take();
        if let Some(user) = previous {
            info!(user_id = %user, "signed out");
        }
        self.publish(SessionEvent::SignedOut);
        Ok(())
    }
}
