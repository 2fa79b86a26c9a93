//! User and per-organization settings records.

use serde::{Deserialize, Serialize};
use wl_shared::{iso_timestamp, Timestamp};

/// A Whisperly user, keyed by the Firebase Authentication UID.
///
/// Users are created on first sign-in by the API layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Primary key. Firebase Authentication UID
    pub firebase_uid: String,

    /// Email address from Firebase Auth, null if not provided
    pub email: Option<String>,

    /// Display name from Firebase Auth, null if not provided
    pub display_name: Option<String>,

    /// Null until persisted
    #[serde(default, with = "iso_timestamp::option")]
    pub created_at: Option<Timestamp>,

    /// Null if never updated
    #[serde(default, with = "iso_timestamp::option")]
    pub updated_at: Option<Timestamp>,
}

/// Organization settings owned by a user.
///
/// A user may hold several settings records, one per organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Primary key, null before persistence
    pub id: Option<String>,

    /// References [`User::firebase_uid`]
    pub firebase_uid: String,

    /// Organization display name
    pub organization_name: Option<String>,

    /// URL-safe organization slug.
    ///
    /// Deprecated: legacy field for personal organization paths, to be
    /// replaced by entity-based routing.
    pub organization_path: String,

    /// Whether this is the user's default organization
    pub is_default: bool,

    #[serde(default, with = "iso_timestamp::option")]
    pub created_at: Option<Timestamp>,

    #[serde(default, with = "iso_timestamp::option")]
    pub updated_at: Option<Timestamp>,
}

impl UserSettings {
    /// Whether the record has been persisted (has an id)
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_user_with_all_fields() {
        let user = User {
            firebase_uid: "firebase-abc".to_string(),
            email: Some("test@example.com".to_string()),
            display_name: Some("Test User".to_string()),
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()),
            updated_at: None,
        };

        let wire = serde_json::to_value(&user).unwrap();
        assert_eq!(
            wire,
            json!({
                "firebase_uid": "firebase-abc",
                "email": "test@example.com",
                "display_name": "Test User",
                "created_at": "2024-01-15T12:00:00.000Z",
                "updated_at": null
            })
        );
    }

    #[test]
    fn test_user_allows_nulls() {
        let user: User = serde_json::from_value(json!({
            "firebase_uid": "firebase-abc",
            "email": null,
            "display_name": null,
            "created_at": null,
            "updated_at": null
        }))
        .unwrap();

        assert!(user.email.is_none());
        assert!(user.display_name.is_none());
        assert!(user.created_at.is_none());
    }

    #[test]
    fn test_user_settings_before_persistence() {
        let settings: UserSettings = serde_json::from_value(json!({
            "id": null,
            "firebase_uid": "firebase-abc",
            "organization_name": null,
            "organization_path": "default-path",
            "is_default": true,
            "created_at": null,
            "updated_at": null
        }))
        .unwrap();

        assert!(!settings.is_persisted());
        assert_eq!(settings.organization_path, "default-path");
        assert!(settings.is_default);
    }

    #[test]
    fn test_user_settings_round_trip() {
        let settings = UserSettings {
            id: Some("settings-123".to_string()),
            firebase_uid: "firebase-abc".to_string(),
            organization_name: Some("My Org".to_string()),
            organization_path: "my-org".to_string(),
            is_default: false,
            created_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap()),
            updated_at: Some(Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap()),
        };

        let raw = serde_json::to_string(&settings).unwrap();
        let back: UserSettings = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, settings);
        assert!(back.is_persisted());
    }
}
