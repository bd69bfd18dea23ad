use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Opaque user identifier issued by the identity provider.
/// 身份提供方签发的不透明用户标识。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl_id!(UserId);
