//! Contract v2: per-project endpoints and term glossaries

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use wl_shared::{iso_timestamp, LanguageCode, LanguageList, Patch, Timestamp};

use crate::domain::DictionaryTranslations;

/// HTTP method an endpoint answers on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// A named translation endpoint within a project, carrying its own language defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub id: String,

    /// Parent project
    pub project_id: String,

    /// URL-safe name, e.g. `translate`
    pub endpoint_name: String,

    pub display_name: String,

    pub http_method: HttpMethod,

    pub instructions: Option<String>,

    pub default_source_language: Option<LanguageCode>,

    pub default_target_languages: Option<Vec<LanguageCode>>,

    /// Null is treated as active
    pub is_active: Option<bool>,

    /// Null means unrestricted
    pub ip_allowlist: Option<Vec<String>>,

    #[serde(default, with = "iso_timestamp::option")]
    pub created_at: Option<Timestamp>,

    #[serde(default, with = "iso_timestamp::option")]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointCreateRequest {
    pub endpoint_name: String,

    pub display_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<HttpMethod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_source_language: Option<LanguageCode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_target_languages: Option<Vec<LanguageCode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_allowlist: Option<Vec<String>>,
}

/// Partial endpoint update; `null` on a [`Patch`] field clears it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<HttpMethod>,

    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub instructions: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub default_source_language: Patch<LanguageCode>,

    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub default_target_languages: Patch<Vec<LanguageCode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub ip_allowlist: Patch<Vec<String>>,
}

/// A glossary term and its translations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glossary {
    pub id: String,

    /// Parent project
    pub project_id: String,

    pub term: String,

    pub translations: DictionaryTranslations,

    /// Disambiguating context, e.g. `greeting`
    pub context: Option<String>,

    #[serde(default, with = "iso_timestamp::option")]
    pub created_at: Option<Timestamp>,

    #[serde(default, with = "iso_timestamp::option")]
    pub updated_at: Option<Timestamp>,
}

/// Unlike the v3 dictionary body, glossary bodies wrap the translations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryCreateRequest {
    pub term: String,

    pub translations: DictionaryTranslations,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<DictionaryTranslations>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryQueryParams {
    /// Substring to search terms for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Query of the v2 glossary lookup callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryLookupRequest {
    /// Term to look up
    pub glossary: String,

    /// Comma-separated language codes
    pub languages: String,
}

impl GlossaryLookupRequest {
    pub fn language_codes(&self) -> LanguageList {
        LanguageList::parse(&self.languages)
    }
}

/// v2 usage row, attributed to an endpoint when one was used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub uuid: String,

    pub entity_id: String,

    pub project_id: String,

    pub endpoint_id: Option<String>,

    #[serde(with = "iso_timestamp")]
    pub timestamp: Timestamp,

    pub request_count: u64,

    pub string_count: u64,

    pub character_count: u64,

    pub success: bool,

    pub error_message: Option<String>,
}

/// v2 request to the external translation service, with glossary callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationServicePayload {
    pub strings: Vec<String>,

    pub target_languages: Vec<LanguageCode>,

    /// Glossary terms the service should resolve through the callback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossaries: Option<Vec<String>>,

    /// URL the service calls with a [`GlossaryLookupRequest`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossary_callback_url: Option<String>,
}

/// v2 answer of the external translation service, already grouped by language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationServiceResponse {
    pub translations: HashMap<LanguageCode, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_wire_form() {
        let methods: Vec<HttpMethod> = serde_json::from_value(json!(["GET", "POST"])).unwrap();
        assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Post]);
        assert_eq!(HttpMethod::Post.to_string(), "POST");

        let lowercase: Result<HttpMethod, _> = serde_json::from_value(json!("post"));
        assert!(lowercase.is_err());
    }

    #[test]
    fn test_endpoint_shape() {
        let endpoint: Endpoint = serde_json::from_value(json!({
            "id": "endpoint-123",
            "project_id": "proj-456",
            "endpoint_name": "translate",
            "display_name": "Translation Endpoint",
            "http_method": "POST",
            "instructions": "Translate formally",
            "default_source_language": "en",
            "default_target_languages": ["ja", "es"],
            "is_active": true,
            "ip_allowlist": null,
            "created_at": "2024-01-15T12:00:00.000Z",
            "updated_at": "2024-01-15T12:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(endpoint.endpoint_name, "translate");
        assert_eq!(endpoint.http_method, HttpMethod::Post);
        assert!(endpoint.ip_allowlist.is_none());
    }

    #[test]
    fn test_endpoint_update_is_partial() {
        let request: EndpointUpdateRequest = serde_json::from_value(json!({
            "display_name": "Updated Endpoint",
            "instructions": "New instructions",
            "is_active": true,
            "ip_allowlist": null
        }))
        .unwrap();

        assert!(request.endpoint_name.is_none());
        assert_eq!(request.instructions, Patch::Set("New instructions".to_string()));
        assert!(request.ip_allowlist.is_cleared());
        assert!(request.default_target_languages.is_unchanged());
    }

    #[test]
    fn test_glossary_requests() {
        let create: GlossaryCreateRequest = serde_json::from_value(json!({
            "term": "hello",
            "translations": { "ja": "こんにちは", "es": "hola" },
            "context": "greeting"
        }))
        .unwrap();
        assert_eq!(create.translations["ja"], "こんにちは");

        let update: GlossaryUpdateRequest = serde_json::from_value(json!({
            "translations": { "ja": "今日は" }
        }))
        .unwrap();
        assert!(update.term.is_none());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "translations": { "ja": "今日は" } })
        );
    }

    #[test]
    fn test_glossary_lookup_and_query() {
        let request = GlossaryLookupRequest {
            glossary: "hello".to_string(),
            languages: "ja,es,fr".to_string(),
        };
        assert_eq!(request.language_codes().len(), 3);

        let params: GlossaryQueryParams = serde_json::from_value(json!({ "search": "hello" })).unwrap();
        assert_eq!(params.search.as_deref(), Some("hello"));
    }

    #[test]
    fn test_usage_record_endpoint_is_nullable() {
        let record: UsageRecord = serde_json::from_value(json!({
            "uuid": "usage-124",
            "entity_id": "entity-456",
            "project_id": "proj-789",
            "endpoint_id": null,
            "timestamp": "2024-01-15T12:00:00.000Z",
            "request_count": 1,
            "string_count": 0,
            "character_count": 0,
            "success": false,
            "error_message": "Rate limit exceeded"
        }))
        .unwrap();
        assert!(record.endpoint_id.is_none());
        assert!(!record.success);
    }

    #[test]
    fn test_service_payload_and_response() {
        let payload: TranslationServicePayload = serde_json::from_value(json!({
            "target_languages": ["ja", "es"],
            "strings": ["Hello", "World"],
            "glossaries": ["greeting", "common"],
            "glossary_callback_url": "https://api.example.com/glossary"
        }))
        .unwrap();
        assert!(payload.target_languages.contains(&"ja".to_string()));

        let response: TranslationServiceResponse = serde_json::from_value(json!({
            "translations": { "ja": ["こんにちは", "世界"], "es": ["Hola", "Mundo"] }
        }))
        .unwrap();
        assert_eq!(response.translations["ja"].len(), 2);
    }
}
