//! Display-name derivation for storage keys.
//!
//! Uploads are stored as `{timestampMillis}-{originalFileName}` so that two
//! uploads of the same file never collide. Users never see that prefix.

use crate::ids::StorageKey;

/// Length of the leading `[0-9]+-` prefix of `key`, hyphen included.
fn prefix_len(key: &str) -> Option<usize> {
    let digits = key.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && key.as_bytes().get(digits) == Some(&b'-') {
        Some(digits + 1)
    } else {
        None
    }
}

/// Strips a leading run of ASCII digits followed by one hyphen.
///
/// Keys without such a prefix come back unchanged. Apply this exactly once to
/// a raw storage key: a display name that itself starts with `123-` would lose
/// more characters on a second pass.
///
/// ```
/// use dv_core::document::display_name;
///
/// assert_eq!(display_name("1700000000000-report.pdf"), "report.pdf");
/// assert_eq!(display_name("report.pdf"), "report.pdf");
/// ```
pub fn display_name(key: &str) -> &str {
    match prefix_len(key) {
        Some(len) => &key[len..],
        None => key,
    }
}

/// The synthetic `{digits}-` prefix of `key`, if it has one.
pub fn timestamp_prefix(key: &str) -> Option<&str> {
    prefix_len(key).map(|len| &key[..len])
}

/// Builds the storage key for a freshly uploaded file.
pub fn storage_key_for_upload(now_ms: i64, file_name: &str) -> StorageKey {
    StorageKey::from_string(format!("{}-{}", now_ms, file_name))
}

/// Builds the key a document moves to when renamed to `new_name`.
///
/// The timestamp prefix of the current key is kept so the renamed object stays
/// unique within the namespace and keeps rendering as `new_name`.
pub fn rename_target_key(current: &StorageKey, new_name: &str) -> StorageKey {
    match timestamp_prefix(current.as_str()) {
        Some(prefix) => StorageKey::from_string(format!("{}{}", prefix, new_name)),
        None => StorageKey::from(new_name),
    }
}
