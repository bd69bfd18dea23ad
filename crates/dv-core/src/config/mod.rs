//! # Pure Data Module / 纯数据模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//!
//! Missing values map to empty facts. The only exception is link lifetimes
//! and notice duration, which fall back to their v1 defaults because a zero
//! lifetime produces links that are already expired.

use std::path::PathBuf;

use crate::links::LinkPolicy;
use crate::notice::DEFAULT_NOTICE_DURATION_MS;

/// Application configuration DTO
/// 应用配置 DTO
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Signed-in user for the local identity provider (may be empty: signed out)
    /// 本地身份提供方的登录用户（可以为空：未登录）
    pub user_id: String,

    /// Root directory of the object store
    pub storage_root: PathBuf,

    /// Bucket holding user documents
    pub documents_bucket: String,

    /// Bucket holding profile pictures
    pub profile_bucket: String,

    /// Base URL used when building signed and public URLs
    pub public_base_url: String,

    /// Secret for signing URLs (may be empty - this is a fact, not an error)
    pub signing_secret: String,

    /// Profile table file
    pub profile_db_path: PathBuf,

    pub links: LinkPolicy,

    pub notice_duration_ms: i64,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let int_at = |section: &str, key: &str| -> Option<i64> {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
        };
        let ttl_at = |key: &str, default: u64| -> u64 {
            int_at("links", key)
                .filter(|v| *v > 0)
                .map(|v| v as u64)
                .unwrap_or(default)
        };

        let defaults = LinkPolicy::defaults();

        Ok(Self {
            user_id: str_at("identity", "user_id"),
            storage_root: PathBuf::from(str_at("storage", "root_dir")),
            documents_bucket: str_at("storage", "documents_bucket"),
            profile_bucket: str_at("storage", "profile_bucket"),
            public_base_url: str_at("storage", "public_base_url"),
            signing_secret: str_at("storage", "signing_secret"),
            profile_db_path: PathBuf::from(str_at("profile", "db_path")),
            links: LinkPolicy {
                preview_ttl_secs: ttl_at("preview_ttl_secs", defaults.preview_ttl_secs),
                download_ttl_secs: ttl_at("download_ttl_secs", defaults.download_ttl_secs),
                share_ttl_secs: ttl_at("share_ttl_secs", defaults.share_ttl_secs),
            },
            notice_duration_ms: int_at("ui", "notice_duration_ms")
                .filter(|v| *v > 0)
                .unwrap_or(DEFAULT_NOTICE_DURATION_MS),
        })
    }

    /// Create AppConfig with paths under `data_dir` for local use
    /// 使用 `data_dir` 下的路径创建 AppConfig
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            user_id: String::new(),
            storage_root: data_dir.join("storage"),
            documents_bucket: "documents".to_string(),
            profile_bucket: "profile".to_string(),
            public_base_url: String::new(),
            signing_secret: String::new(),
            profile_db_path: data_dir.join("users.json"),
            links: LinkPolicy::defaults(),
            notice_duration_ms: DEFAULT_NOTICE_DURATION_MS,
        }
    }
}
