//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for wiring use cases and sessions.
//! 用例与会话装配所需的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern. No defaults, no hidden
//! logic, just parameter grouping.
//! **这不是 Builder 模式。** 仅用于参数打包。

use std::sync::Arc;

use dv_core::links::LinkPolicy;
use dv_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
#[derive(Clone)]
pub struct AppDeps {
    // Identity / 身份
    pub identity: Arc<dyn IdentityPort>,

    // Storage / 存储
    pub documents: Arc<dyn ObjectStoragePort>,
    pub profile_pictures: Arc<dyn ObjectStoragePort>,
    pub fetcher: Arc<dyn ObjectFetchPort>,
    pub profiles: Arc<dyn ProfileRepositoryPort>,

    // UI / 界面
    pub notices: Arc<dyn NoticePort>,

    // System / 系统
    pub clock: Arc<dyn ClockPort>,
    pub links: LinkPolicy,
}
