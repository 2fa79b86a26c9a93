//! Project request bodies

use serde::{Deserialize, Serialize};
use wl_shared::{LanguageCode, Patch};

/// Body for creating a project.
///
/// `project_name` and `display_name` are required; everything else may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCreateRequest {
    /// Must be unique within the entity
    pub project_name: String,

    pub display_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    /// Omit for auto-detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_source_language: Option<LanguageCode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_target_languages: Option<Vec<LanguageCode>>,

    /// Omit for unrestricted access
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_allowlist: Option<Vec<String>>,
}

impl ProjectCreateRequest {
    pub fn new(project_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            display_name: display_name.into(),
            description: None,
            instructions: None,
            default_source_language: None,
            default_target_languages: None,
            ip_allowlist: None,
        }
    }
}

/// Body for updating a project.
///
/// Every field is optional. [`Patch`] fields also accept `null`, which clears
/// the stored value (`api_key: null` revokes the key, `ip_allowlist: null`
/// lifts restrictions, `default_source_language: null` switches to
/// auto-detect).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub description: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub instructions: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub default_source_language: Patch<LanguageCode>,

    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub default_target_languages: Patch<Vec<LanguageCode>>,

    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub ip_allowlist: Patch<Vec<String>>,

    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub api_key: Patch<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ProjectUpdateRequest {
    /// True when the request would change nothing
    pub fn is_empty(&self) -> bool {
        self.project_name.is_none()
            && self.display_name.is_none()
            && self.description.is_unchanged()
            && self.instructions.is_unchanged()
            && self.default_source_language.is_unchanged()
            && self.default_target_languages.is_unchanged()
            && self.ip_allowlist.is_unchanged()
            && self.api_key.is_unchanged()
            && self.is_active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_required_fields() {
        let request: ProjectCreateRequest = serde_json::from_value(json!({
            "project_name": "my-project",
            "display_name": "My Project",
            "description": "A test project",
            "instructions": "Translate formally"
        }))
        .unwrap();

        assert_eq!(request.project_name, "my-project");
        assert!(request.ip_allowlist.is_none());

        let missing: Result<ProjectCreateRequest, _> =
            serde_json::from_value(json!({ "project_name": "only-name" }));
        assert!(missing.is_err());
    }

    #[test]
    fn test_create_request_builder_serializes_minimal_body() {
        let request = ProjectCreateRequest::new("my-app", "My App");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "project_name": "my-app", "display_name": "My App" })
        );
    }

    #[test]
    fn test_partial_update() {
        let request: ProjectUpdateRequest = serde_json::from_value(json!({
            "display_name": "Updated Name",
            "is_active": true
        }))
        .unwrap();

        assert_eq!(request.display_name.as_deref(), Some("Updated Name"));
        assert_eq!(request.is_active, Some(true));
        assert!(request.api_key.is_unchanged());
        assert!(!request.is_empty());
        assert!(ProjectUpdateRequest::default().is_empty());
    }

    #[test]
    fn test_null_clears_and_absence_leaves_unchanged() {
        let request: ProjectUpdateRequest = serde_json::from_value(json!({
            "api_key": null,
            "ip_allowlist": null,
            "default_target_languages": ["ja", "es"]
        }))
        .unwrap();

        assert!(request.api_key.is_cleared());
        assert!(request.ip_allowlist.is_cleared());
        assert!(request.default_source_language.is_unchanged());
        assert_eq!(
            request.default_target_languages,
            Patch::Set(vec!["ja".to_string(), "es".to_string()])
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "api_key": null,
                "ip_allowlist": null,
                "default_target_languages": ["ja", "es"]
            })
        );
    }
}
