//! ID type wrappers for type safety.

mod id_macro;
pub mod namespace;
pub mod storage_key;
pub mod user_id;

pub use namespace::{Namespace, ObjectPath};
pub use storage_key::StorageKey;
pub use user_id::UserId;
