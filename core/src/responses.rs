//! Envelope aliases for each endpoint, for client convenience

use wl_shared::ApiResponse;

use crate::domain::{DictionaryTranslations, Project, RateLimitStatus, UserSettings};
use crate::dto::{
    AnalyticsResponse, AvailableLanguage, DictionaryLookupResponse, DictionarySearchResponse,
    HealthCheckData, ProjectLanguagesResponse, TranslationResponse,
};

pub type ProjectListResponse = ApiResponse<Vec<Project>>;
pub type ProjectResponse = ApiResponse<Project>;
pub type UserSettingsResponse = ApiResponse<UserSettings>;
pub type RateLimitResponse = ApiResponse<RateLimitStatus>;
pub type DictionaryResponse = ApiResponse<DictionaryTranslations>;
pub type DictionarySearchApiResponse = ApiResponse<DictionarySearchResponse>;
pub type DictionaryLookupApiResponse = ApiResponse<DictionaryLookupResponse>;
pub type AnalyticsApiResponse = ApiResponse<AnalyticsResponse>;
pub type TranslationApiResponse = ApiResponse<TranslationResponse>;
pub type AvailableLanguagesApiResponse = ApiResponse<Vec<AvailableLanguage>>;
pub type ProjectLanguagesApiResponse = ApiResponse<ProjectLanguagesResponse>;
pub type HealthCheckResponse = ApiResponse<HealthCheckData>;
