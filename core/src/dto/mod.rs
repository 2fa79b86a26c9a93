//! Request, query and response payloads exchanged with the API.

pub mod analytics;
pub mod dictionary;
pub mod health;
pub mod language;
pub mod project;
pub mod query;
pub mod translation;
pub mod user;

pub use analytics::{AnalyticsResponse, UsageAggregate, UsageByDate, UsageByProject};
pub use dictionary::{
    DictionaryCreateRequest, DictionaryLookupRequest, DictionaryLookupResponse,
    DictionarySearchResponse, DictionaryUpdateRequest,
};
pub use health::{HealthCheckData, HealthStatus};
pub use language::{AvailableLanguage, ProjectLanguagesResponse};
pub use project::{ProjectCreateRequest, ProjectUpdateRequest};
pub use query::{ProjectQueryParams, UsageAnalyticsQueryParams};
pub use translation::{
    TranslationRequest, TranslationResponse, TranslationServicePayload,
    TranslationServiceResponse,
};
pub use user::{UserCreateRequest, UserSettingsUpdateRequest, UserUpdateRequest};
