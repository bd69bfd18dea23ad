use std::sync::Arc;

use dv_core::ports::{NoticePort, ProfileRepositoryPort};
use dv_core::profile::Profile;
use tracing::{error, warn};

use crate::error::ProfileError;
use crate::identity::IdentityContext;

/// Use case for reading the signed-in user's profile row
/// 读取当前用户资料的用例
pub struct GetProfile {
    identity: IdentityContext,
    profiles: Arc<dyn ProfileRepositoryPort>,
    notices: Arc<dyn NoticePort>,
}

impl GetProfile {
    pub fn from_ports(
        identity: IdentityContext,
        profiles: Arc<dyn ProfileRepositoryPort>,
        notices: Arc<dyn NoticePort>,
    ) -> Self {
        Self {
            identity,
            profiles,
            notices,
        }
    }

    #[tracing::instrument(name = "usecase.get_profile.execute", skip(self))]
    pub async fn execute(&self) -> Result<Profile, ProfileError> {
        let Some(user) = self.identity.current_user().await else {
            warn!("profile requested without a signed-in user");
            return Err(ProfileError::AuthRequired);
        };

        let result = match self.profiles.get_profile(&user).await {
            Ok(Some(profile)) => return Ok(profile),
            Ok(None) => ProfileError::NotFound,
            Err(e) => {
                error!(user_id = %user, error = %e, "Error fetching profile");
                ProfileError::FetchFailed(e.to_string())
            }
        };
        self.notices.notify(result.notice());
        Err(result)
    }
}
