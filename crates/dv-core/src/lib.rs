//! # dv-core
//!
//! Core domain models and the document view engine for DocVault.
//!
//! This crate contains pure logic without any infrastructure dependencies.

pub mod config;
pub mod document;
pub mod ids;
pub mod links;
pub mod notice;
pub mod ports;
pub mod profile;
pub mod view;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use document::{display_name, DocumentEntry, DocumentKind};
pub use ids::{Namespace, ObjectPath, StorageKey, UserId};
pub use links::{LinkPolicy, LinkPurpose, SignedUrl};
pub use notice::{Notice, NoticeBoard, NoticeTone};
pub use profile::{Profile, ProfileUpdate};
pub use view::{SortOption, ViewPhase, ViewState};
