//! User profile row
//! 用户资料

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// One row of the profile table, keyed by user id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Option<UserId>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub aadhaar: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub profile_picture: String,
}

/// The user-editable subset of [`Profile`].
///
/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub username: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.phone_number.is_none() && self.username.is_none()
    }

    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(full_name) = &self.full_name {
            profile.full_name = full_name.clone();
        }
        if let Some(phone_number) = &self.phone_number {
            profile.phone_number = phone_number.clone();
        }
        if let Some(username) = &self.username {
            profile.username = username.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_only_touches_editable_fields() {
        let mut profile = Profile {
            email: "a@example.com".into(),
            full_name: "Old".into(),
            username: "old".into(),
            ..Default::default()
        };
        ProfileUpdate {
            full_name: Some("New Name".into()),
            ..Default::default()
        }
        .apply_to(&mut profile);

        assert_eq!(profile.full_name, "New Name");
        assert_eq!(profile.username, "old");
        assert_eq!(profile.email, "a@example.com");
    }

    #[test]
    fn missing_columns_deserialize_as_empty() {
        let profile: Profile = serde_json::from_str(r#"{"id":"u1","email":"x@y.z"}"#).unwrap();
        assert_eq!(profile.id, Some(UserId::from("u1")));
        assert!(profile.full_name.is_empty());
    }
}
