use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Object name inside a user's namespace, e.g. `1700000000000-report.pdf`.
///
/// This is the only stable identity of a document. The display name derived
/// from it is not unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StorageKey(String);

impl_id!(StorageKey);
