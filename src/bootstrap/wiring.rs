//! # Dependency Wiring / 依赖装配
//!
//! Turns an [`AppConfig`] into concrete adapters. This is the only place that
//! knows which adapter implements which port.
//! 唯一知道哪个适配器实现哪个端口的地方。

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use dv_app::AppDeps;
use dv_core::config::AppConfig;
use dv_core::ids::UserId;
use dv_core::ports::ClockPort;
use dv_infra::{
    ClockedNoticeBoard, FileProfileRepository, FsObjectStorage, LocalIdentity, SystemClock,
    UrlSigner,
};

const DEFAULT_BASE_URL: &str = "docvault://local";
const DEFAULT_DOCUMENTS_BUCKET: &str = "documents";
const DEFAULT_PROFILE_BUCKET: &str = "profile";
const SESSION_FILE_NAME: &str = "session";

/// Adapters built from configuration.
///
/// `deps` only exposes ports; the notice board is also kept concrete so the
/// caller can read back what was shown.
pub struct WiredDependencies {
    pub deps: AppDeps,
    pub notices: Arc<ClockedNoticeBoard>,
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Build every adapter from `config`.
/// 根据配置构建所有适配器。
///
/// Empty configuration facts are replaced with local defaults here, not in
/// the config DTO.
pub async fn wire_dependencies(
    config: &AppConfig,
    data_dir: PathBuf,
) -> anyhow::Result<WiredDependencies> {
    let storage_root = if config.storage_root.as_os_str().is_empty() {
        data_dir.join("storage")
    } else {
        config.storage_root.clone()
    };
    let profile_db_path = if config.profile_db_path.as_os_str().is_empty() {
        data_dir.join("users.json")
    } else {
        config.profile_db_path.clone()
    };
    let base_url = or_default(&config.public_base_url, DEFAULT_BASE_URL);
    if config.signing_secret.is_empty() {
        tracing::warn!("signing secret is empty; signed URLs are only as safe as the storage root");
    }

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let signer = Arc::new(
        UrlSigner::new(&base_url, config.signing_secret.as_bytes())
            .context("Failed to build URL signer")?,
    );

    let documents = Arc::new(FsObjectStorage::new(
        storage_root.clone(),
        or_default(&config.documents_bucket, DEFAULT_DOCUMENTS_BUCKET),
        signer.clone(),
        clock.clone(),
    ));
    let profile_pictures = Arc::new(FsObjectStorage::new(
        storage_root,
        or_default(&config.profile_bucket, DEFAULT_PROFILE_BUCKET),
        signer,
        clock.clone(),
    ));

    let configured_user = (!config.user_id.trim().is_empty())
        .then(|| UserId::from(config.user_id.trim()));
    let session_file = profile_db_path.with_file_name(SESSION_FILE_NAME);
    let identity = Arc::new(
        LocalIdentity::restore(session_file, configured_user)
            .await
            .context("Failed to restore local session")?,
    );

    let profiles = Arc::new(FileProfileRepository::new(profile_db_path));
    let notices = Arc::new(ClockedNoticeBoard::new(
        config.notice_duration_ms,
        clock.clone(),
    ));

    let deps = AppDeps {
        identity,
        documents: documents.clone(),
        profile_pictures,
        fetcher: documents,
        profiles,
        notices: notices.clone(),
        clock,
        links: config.links,
    };

    Ok(WiredDependencies { deps, notices })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dv_core::ports::{IdentityPort, ObjectStoragePort, UploadOptions};

    #[tokio::test]
    async fn test_empty_config_is_wired_under_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::with_system_defaults(dir.path().to_path_buf());
        config.storage_root = PathBuf::new();
        config.documents_bucket = String::new();
        config.user_id = "user-1".to_string();

        let wired = wire_dependencies(&config, dir.path().to_path_buf())
            .await
            .unwrap();

        let user = wired.deps.identity.current_user().await.unwrap().unwrap();
        let path = dv_core::ids::Namespace::for_user(&user)
            .path(&dv_core::ids::StorageKey::from("1-a.pdf"));
        wired
            .deps
            .documents
            .upload(&path, b"x".to_vec(), UploadOptions::default())
            .await
            .unwrap();

        assert!(dir.path().join("storage/documents/user-1/1-a.pdf").exists());
    }
}
