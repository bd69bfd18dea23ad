use anyhow::bail;
use dv_core::ids::UserId;
use tracing::{error, info};

use crate::identity::IdentityContext;

/// Use case for starting a session
/// 登录的用例
///
/// Watching document sessions receive `SignedIn` and refresh into the new
/// user's namespace.
pub struct SignIn {
    identity: IdentityContext,
}

impl SignIn {
    pub fn new(identity: IdentityContext) -> Self {
        Self { identity }
    }

    #[tracing::instrument(name = "usecase.sign_in.execute", skip(self), fields(user_id = %user))]
    pub async fn execute(&self, user: UserId) -> anyhow::Result<()> {
        let user = UserId::from(user.as_str().trim());
        if user.is_empty() {
            bail!("User id must not be empty");
        }
        self.identity.sign_in(user).await.map_err(|e| {
            error!(error = %e, "Sign in failed");
            e
        })?;
        info!("Signed in");
        Ok(())
    }
}
