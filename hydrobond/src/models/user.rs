use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::File;

/// Account as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub screen_name: String,
    pub posts_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// `None` when the user has no avatar. The key itself must be present:
    /// a response without it is rejected rather than read as "no avatar".
    #[serde(deserialize_with = "required_nullable")]
    pub avatar_file: Option<File>,
}

/// `null` becomes `None`; a missing key stays a "missing field" error.
fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::AVATAR_JSON;

    fn user_json(avatar: &str) -> String {
        format!(
            r#"{{
                "id": 1,
                "name": "New name",
                "screenName": "user",
                "postsCount": 1,
                "createdAt": "1970-01-01T00:00:00.000Z",
                "updatedAt": "1970-01-01T00:00:00.000Z"
                {}
            }}"#,
            avatar
        )
    }

    #[test]
    fn test_deserialize_with_avatar() {
        let user: User =
            serde_json::from_str(&user_json(&format!(r#", "avatarFile": {}"#, AVATAR_JSON))).unwrap();

        assert_eq!(user.name, "New name");
        assert_eq!(user.screen_name, "user");
        assert_eq!(user.posts_count, 1);
        assert_eq!(user.avatar_file.map(|file| file.id), Some(1));
    }

    #[test]
    fn test_deserialize_null_avatar() {
        let user: User = serde_json::from_str(&user_json(r#", "avatarFile": null"#)).unwrap();

        assert!(user.avatar_file.is_none());
        assert_eq!(user.created_at.timestamp(), 0);
    }

    #[test]
    fn test_missing_avatar_key_is_rejected() {
        let err = serde_json::from_str::<User>(&user_json("")).unwrap_err();
        assert!(err.to_string().contains("avatarFile"));
    }

    #[test]
    fn test_serialize_keeps_null_avatar() {
        let user: User = serde_json::from_str(&user_json(r#", "avatarFile": null"#)).unwrap();
        let json = serde_json::to_value(&user).unwrap();

        assert!(json["avatarFile"].is_null());
        assert_eq!(json["screenName"], "user");
    }
}
