use tracing::{error, info};

use crate::identity::IdentityContext;

/// Use case for ending the current session
/// 退出登录的用例
///
/// Open document sessions that watch session changes pick up the resulting
/// `SignedOut` event and clear themselves.
pub struct SignOut {
    identity: IdentityContext,
}

impl SignOut {
    pub fn new(identity: IdentityContext) -> Self {
        Self { identity }
    }

    #[tracing::instrument(name = "usecase.sign_out.execute", skip(self))]
    pub async fn execute(&self) -> anyhow::Result<()> {
        self.identity.sign_out().await.map_err(|e| {
            error!(error = %e, "Sign out failed");
            e
        })?;
        info!("Signed out");
        Ok(())
    }
}
