use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use super::{StorageKey, UserId};

/// Per-user key prefix under which all of a user's objects live.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Namespace(String);

impl Namespace {
    pub fn for_user(user_id: &UserId) -> Self {
        Self(user_id.as_str().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn path(&self, key: &StorageKey) -> ObjectPath {
        ObjectPath {
            namespace: self.clone(),
            key: key.clone(),
        }
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/", self.0)
    }
}

/// Fully qualified object location: `{namespace}/{storage_key}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectPath {
    pub namespace: Namespace,
    pub key: StorageKey,
}

impl ObjectPath {
    pub fn new(namespace: Namespace, key: StorageKey) -> Self {
        Self { namespace, key }
    }
}

impl Display for ObjectPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace.as_str(), self.key)
    }
}
