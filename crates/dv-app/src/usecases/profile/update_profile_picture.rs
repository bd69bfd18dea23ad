use std::sync::Arc;

use dv_core::ids::{Namespace, StorageKey};
use dv_core::notice::Notice;
use dv_core::ports::{NoticePort, ObjectStoragePort, ProfileRepositoryPort, UploadOptions};
use tracing::{error, info, warn};

use crate::error::ProfileError;
use crate::identity::IdentityContext;

/// Use case for replacing the profile picture
/// 更换头像的用例
///
/// The image goes to the profile bucket at `{user}/{file_name}`, replacing any
/// earlier upload with the same name. Its public URL is then stored on the
/// profile row.
pub struct UpdateProfilePicture {
    identity: IdentityContext,
    pictures: Arc<dyn ObjectStoragePort>,
    profiles: Arc<dyn ProfileRepositoryPort>,
    notices: Arc<dyn NoticePort>,
}

impl UpdateProfilePicture {
    pub fn from_ports(
        identity: IdentityContext,
        pictures: Arc<dyn ObjectStoragePort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
        notices: Arc<dyn NoticePort>,
    ) -> Self {
        Self {
            identity,
            pictures,
            profiles,
            notices,
        }
    }

    /// Returns the public URL now stored on the profile.
    #[tracing::instrument(
        name = "usecase.update_profile_picture.execute",
        skip(self, bytes),
        fields(size = bytes.len())
    )]
    pub async fn execute(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ProfileError> {
        let Some(user) = self.identity.current_user().await else {
            warn!("profile picture update requested without a signed-in user");
            return Err(ProfileError::AuthRequired);
        };

        let path = Namespace::for_user(&user).path(&StorageKey::from(file_name));
        if let Err(e) = self
            .pictures
            .upload(&path, bytes, UploadOptions { overwrite: true })
            .await
        {
            error!(path = %path, error = %e, "Error uploading profile picture");
            let err = ProfileError::PictureUploadFailed(e.to_string());
            self.notices.notify(err.notice());
            return Err(err);
        }

        let url = self.pictures.public_url(&path);
        if let Err(e) = self.profiles.set_profile_picture(&user, &url).await {
            error!(user_id = %user, error = %e, "Error saving profile picture url");
            let err = ProfileError::PictureSaveFailed(e.to_string());
            self.notices.notify(err.notice());
            return Err(err);
        }

        info!(user_id = %user, url = %url, "Profile picture updated");
        self.notices
            .notify(Notice::affirmative("Profile picture updated successfully"));
        Ok(url)
    }
}
