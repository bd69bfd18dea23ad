use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use dv_core::ids::UserId;
use dv_core::ports::ProfileRepositoryPort;
use dv_core::profile::{Profile, ProfileUpdate};
use tokio::fs;
use tokio::sync::Mutex;

/// Profile table stored as one JSON object keyed by user id.
/// 以用户 ID 为键的 JSON 资料表
///
/// Writes are serialized through an in-process lock and land atomically via
/// a temporary file and a rename.
pub struct FileProfileRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

type ProfileTable = BTreeMap<String, Profile>;

impl FileProfileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create profile dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn load_table(&self) -> Result<ProfileTable> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ProfileTable::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read profiles failed: {}", self.path.display()))
            }
        };
        serde_json::from_str(&content)
            .with_context(|| format!("parse profiles failed: {}", self.path.display()))
    }

    async fn atomic_write(&self, table: &ProfileTable) -> Result<()> {
        self.ensure_parent_dir().await?;
        let content = serde_json::to_string_pretty(table)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp profiles failed: {}", tmp_path.display()))?;

        // TODO: Windows 上 rename 覆盖可能不一致；macOS/Linux OK。
        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp profiles to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }

    /// Creates or replaces the row for `profile.id`.
    ///
    /// Rows are normally provisioned by the identity provider at sign-up; this
    /// is how the local setup seeds one.
    pub async fn upsert(&self, profile: Profile) -> Result<()> {
        let id = profile
            .id
            .clone()
            .context("profile row needs an id")?;
        let _guard = self.write_lock.lock().await;
        let mut table = self.load_table().await?;
        table.insert(id.into_inner(), profile);
        self.atomic_write(&table).await
    }

    async fn modify(&self, user_id: &UserId, apply: impl FnOnce(&mut Profile)) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut table = self.load_table().await?;
        let row = table
            .get_mut(user_id.as_str())
            .with_context(|| format!("no profile row for user {user_id}"))?;
        apply(row);
        self.atomic_write(&table).await
    }
}

#[async_trait]
impl ProfileRepositoryPort for FileProfileRepository {
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<Profile>> {
        let mut table = self.load_table().await?;
        Ok(table.remove(user_id.as_str()).map(|mut profile| {
            profile.id.get_or_insert_with(|| user_id.clone());
            profile
        }))
    }

    async fn update_profile(&self, user_id: &UserId, update: &ProfileUpdate) -> Result<()> {
        self.modify(user_id, |row| update.apply_to(row)).await
    }

    async fn set_profile_picture(&self, user_id: &UserId, url: &str) -> Result<()> {
        self.modify(user_id, |row| row.profile_picture = url.to_string())
            .await
    }
}
