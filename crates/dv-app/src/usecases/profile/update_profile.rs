use std::sync::Arc;

use dv_core::notice::Notice;
use dv_core::ports::{NoticePort, ProfileRepositoryPort};
use dv_core::profile::ProfileUpdate;
use tracing::{error, info, warn};

use crate::error::ProfileError;
use crate::identity::IdentityContext;

/// Use case for editing the user-editable profile fields
/// 更新用户可编辑资料字段的用例
pub struct UpdateProfile {
    identity: IdentityContext,
    profiles: Arc<dyn ProfileRepositoryPort>,
    notices: Arc<dyn NoticePort>,
}

impl UpdateProfile {
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

    /// Writes the fields set in `update`. An empty update writes nothing.
    #[tracing::instrument(name = "usecase.update_profile.execute", skip(self, update))]
    pub async fn execute(&self, update: ProfileUpdate) -> Result<(), ProfileError> {
        let Some(user) = self.identity.current_user().await else {
            warn!("profile update requested without a signed-in user");
            return Err(ProfileError::AuthRequired);
        };
        if update.is_empty() {
            return Ok(());
        }

        match self.profiles.update_profile(&user, &update).await {
            Ok(()) => {
                info!(user_id = %user, "Profile updated");
                self.notices
                    .notify(Notice::affirmative("Profile updated successfully"));
                Ok(())
            }
            Err(e) => {
                error!(user_id = %user, error = %e, "Error updating profile");
                let err = ProfileError::UpdateFailed(e.to_string());
                self.notices.notify(err.notice());
                Err(err)
            }
        }
    }
}
