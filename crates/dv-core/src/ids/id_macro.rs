//! Shared impls for string-backed identifiers.
//!
//! Ids here are issued elsewhere (the identity provider, the object store),
//! so the macro only wraps and unwraps; it never generates values.

macro_rules! impl_id {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                pub fn from_string(s: String) -> Self {
                    Self(s)
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }

                pub fn into_inner(self) -> String {
                    self.0
                }

                pub fn is_empty(&self) -> bool {
                    self.0.is_empty()
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<String> for $name {
                fn from(s: String) -> Self {
                    Self(s)
                }
            }

            impl From<&str> for $name {
                fn from(s: &str) -> Self {
                    Self(s.to_owned())
                }
            }

            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            // Lets maps keyed by the id be queried with a plain `&str`.
            impl std::borrow::Borrow<str> for $name {
                fn borrow(&self) -> &str {
                    &self.0
                }
            }
        )*
    };
}

pub(crate) use impl_id;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::ids::{StorageKey, UserId};

    #[test]
    fn ids_display_their_raw_value() {
        let key = StorageKey::from("1700000000000-report.pdf");
        assert_eq!(key.to_string(), "1700000000000-report.pdf");
        assert_eq!(key.clone().into_inner(), key.as_str());
    }

    #[test]
    fn empty_user_id_is_detectable() {
        assert!(UserId::from("").is_empty());
        assert!(!UserId::from("user-1").is_empty());
    }

    #[test]
    fn keyed_sets_accept_str_lookups() {
        let keys: HashSet<StorageKey> = ["1-a.pdf", "2-b.pdf"].into_iter().map(StorageKey::from).collect();
        assert!(keys.contains("1-a.pdf"));
        assert!(!keys.contains("a.pdf"));
    }
}
