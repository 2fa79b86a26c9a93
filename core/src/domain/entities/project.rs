//! Project entity

use serde::{Deserialize, Serialize};
use wl_shared::{iso_timestamp, LanguageCode, Timestamp};

/// A localization project within an entity (organization).
///
/// Projects are the primary organizational unit for translations: each one
/// has its own API key, language configuration and dictionaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Primary key
    pub id: String,

    /// Owning entity/organization
    pub entity_id: String,

    /// URL-safe machine name used in API routes (e.g. `my-app`)
    pub project_name: String,

    /// Human-readable name (e.g. `My Application`)
    pub display_name: String,

    pub description: Option<String>,

    /// Context handed to the translation service
    pub instructions: Option<String>,

    /// Default source language; null means auto-detect
    pub default_source_language: Option<LanguageCode>,

    /// Default target languages (e.g. `["ja", "es"]`)
    pub default_target_languages: Option<Vec<LanguageCode>>,

    /// Allowed client IPs; null means unrestricted
    pub ip_allowlist: Option<Vec<String>>,

    /// Null until a key is generated
    pub api_key: Option<String>,

    /// Null is treated as active
    pub is_active: Option<bool>,

    #[serde(default, with = "iso_timestamp::option")]
    pub created_at: Option<Timestamp>,

    #[serde(default, with = "iso_timestamp::option")]
    pub updated_at: Option<Timestamp>,
}

impl Project {
    /// Active unless explicitly disabled
    pub fn is_effectively_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }

    /// Whether API access is limited to an IP allowlist
    pub fn has_ip_restrictions(&self) -> bool {
        self.ip_allowlist.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Project {
        serde_json::from_value(json!({
            "id": "proj-1",
            "entity_id": "entity-1",
            "project_name": "my-project",
            "display_name": "My Project",
            "description": null,
            "instructions": "Translate formally",
            "default_source_language": "en",
            "default_target_languages": ["ja", "es"],
            "ip_allowlist": null,
            "api_key": null,
            "is_active": null,
            "created_at": "2024-01-15T12:00:00.000Z",
            "updated_at": null
        }))
        .unwrap()
    }

    #[test]
    fn test_project_shape() {
        let project = sample();
        assert_eq!(project.project_name, "my-project");
        assert_eq!(
            project.default_target_languages,
            Some(vec!["ja".to_string(), "es".to_string()])
        );
        assert!(project.ip_allowlist.is_none());
        assert!(!project.has_ip_restrictions());
    }

    #[test]
    fn test_null_is_active_means_active() {
        let mut project = sample();
        assert!(project.is_effectively_active());

        project.is_active = Some(false);
        assert!(!project.is_effectively_active());
    }

    #[test]
    fn test_nulls_are_written_explicitly() {
        let wire = serde_json::to_value(sample()).unwrap();
        let object = wire.as_object().unwrap();

        assert_eq!(object["ip_allowlist"], serde_json::Value::Null);
        assert_eq!(object["api_key"], serde_json::Value::Null);
        assert_eq!(object.len(), 13);
    }
}
