use anyhow::Result;
use async_trait::async_trait;

use crate::ids::UserId;
use crate::profile::{Profile, ProfileUpdate};

/// Single-row access to the profile table, keyed by user id.
#[async_trait]
pub trait ProfileRepositoryPort: Send + Sync {
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<Profile>>;

    async fn update_profile(&self, user_id: &UserId, update: &ProfileUpdate) -> Result<()>;

    async fn set_profile_picture(&self, user_id: &UserId, url: &str) -> Result<()>;
}
