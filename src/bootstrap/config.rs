//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No business rules / 禁止业务规则**

use std::path::{Path, PathBuf};

use anyhow::Context;
use dv_core::config::AppConfig;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Empty strings and missing sections are accepted as they are.
/// 空字符串和缺失的部分按原样接受。
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
/// 无法读取文件或内容不是有效 TOML 时返回错误。
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Load `config_path` if it exists, otherwise use system defaults under
/// `data_dir`.
/// 配置文件存在时加载，否则使用 `data_dir` 下的系统默认值。
pub fn load_or_default(config_path: &Path, data_dir: PathBuf) -> anyhow::Result<AppConfig> {
    if config_path.exists() {
        load_config(config_path.to_path_buf())
    } else {
        tracing::debug!(path = %config_path.display(), "config file not found, using system defaults");
        Ok(AppConfig::with_system_defaults(data_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Test that valid TOML is parsed correctly
    /// 测试有效 TOML 被正确解析
    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [identity]
            user_id = "user-1"

            [storage]
            root_dir = "/srv/docvault"
            documents_bucket = "documents"

            [links]
            download_ttl_secs = 30
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.user_id, "user-1");
        assert_eq!(config.storage_root, PathBuf::from("/srv/docvault"));
        assert_eq!(config.documents_bucket, "documents");
        assert_eq!(config.links.download_ttl_secs, 30);
        assert_eq!(config.links.preview_ttl_secs, 3_600);
    }

    /// Test that invalid TOML returns error
    /// 测试无效 TOML 返回错误
    #[test]
    fn test_load_config_returns_error_on_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[storage\nroot_dir = ").unwrap();

        assert!(load_config(temp_file.path().to_path_buf()).is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_system_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = load_or_default(&dir.path().join("absent.toml"), dir.path().to_path_buf())
            .unwrap();

        assert_eq!(config.storage_root, dir.path().join("storage"));
        assert_eq!(config.documents_bucket, "documents");
        assert_eq!(config.user_id, "");
    }
}
