//! Language catalog payloads

use serde::{Deserialize, Serialize};
use wl_shared::{LanguageCode, LanguageList};

/// A supported language with display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableLanguage {
    /// ISO 639-1 code, e.g. `ja`
    pub language_code: LanguageCode,
    /// English name, e.g. `Japanese`
    pub language: String,
    /// Flag emoji
    pub flag: String,
}

/// Languages configured for a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLanguagesResponse {
    pub project_id: String,
    /// Comma-separated codes, e.g. `en,zh,ja`
    pub languages: String,
}

impl ProjectLanguagesResponse {
    pub fn new(project_id: impl Into<String>, languages: &LanguageList) -> Self {
        Self {
            project_id: project_id.into(),
            languages: languages.to_string(),
        }
    }

    pub fn language_codes(&self) -> LanguageList {
        LanguageList::parse(&self.languages)
    }
}
