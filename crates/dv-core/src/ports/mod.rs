//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and the external collaborators: identity provider, object storage and
//! the profile table. Use cases depend only on these traits.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `dv-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent an external capability?**
//! 2. **Will it be depended upon by multiple use cases?**
//! 3. **Is it implemented by the infrastructure layer?**
//!
//! If all three answers are **yes**, place it here.

mod clock;
pub mod errors;
pub mod identity;
mod notice;
pub mod object_storage;
pub mod profile_repository;

pub use clock::ClockPort;
pub use errors::StorageError;
pub use identity::{IdentityPort, SessionEvent};
pub use notice::NoticePort;
pub use object_storage::{ObjectFetchPort, ObjectStoragePort, UploadOptions};
pub use profile_repository::ProfileRepositoryPort;
