//! Document domain model
//! 文档领域模型

pub mod collation;
mod entry;
mod kind;
mod name;

pub use entry::DocumentEntry;
pub use kind::DocumentKind;
pub use name::{display_name, rename_target_key, storage_key_for_upload, timestamp_prefix};
