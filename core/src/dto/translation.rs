//! Translation API payloads and the external translation service contract

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wl_shared::LanguageCode;

/// Body of the public translation endpoint.
///
/// `strings` and `target_languages` are expected to be non-empty; the API
/// layer enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub strings: Vec<String>,

    /// e.g. `["ja", "es"]`
    pub target_languages: Vec<LanguageCode>,

    /// Omit for auto-detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<LanguageCode>,

    /// Skip dictionary term replacement, used when translating dictionary entries themselves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_dictionaries: Option<bool>,
}

impl TranslationRequest {
    pub fn new(strings: Vec<String>, target_languages: Vec<LanguageCode>) -> Self {
        Self {
            strings,
            target_languages,
            source_language: None,
            skip_dictionaries: None,
        }
    }

    pub fn with_source_language(mut self, language: impl Into<LanguageCode>) -> Self {
        self.source_language = Some(language.into());
        self
    }

    /// Whether dictionary matching is skipped; absent means not skipped
    pub fn skips_dictionaries(&self) -> bool {
        self.skip_dictionaries.unwrap_or(false)
    }
}

/// Answer of the public translation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// Target language → translations in the same order as the input `strings`
    pub translations: HashMap<LanguageCode, Vec<String>>,

    /// Dictionary terms matched during translation
    pub dictionary_terms_used: Vec<String>,

    /// Identifier for tracking and debugging
    pub request_id: String,
}

/// Request sent to the external translation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationServicePayload {
    pub texts: Vec<String>,

    /// e.g. `["es", "fr", "de", "zh", "ja"]`
    pub target_language_codes: Vec<LanguageCode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Preserve formatting such as line breaks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_formatting: Option<bool>,

    /// Omit for auto-detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<LanguageCode>,
}

/// Answer of the external translation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationServiceResponse {
    /// One row per input text; each row follows `target_language_codes` order
    pub translations: Vec<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_source_language: Option<LanguageCode>,
}

impl TranslationServiceResponse {
    /// Regroup the text-major rows into the language-keyed layout of
    /// [`TranslationResponse::translations`].
    ///
    /// Short rows leave the missing cells out rather than padding.
    pub fn by_language(&self, target_language_codes: &[LanguageCode]) -> HashMap<LanguageCode, Vec<String>> {
        target_language_codes
            .iter()
            .enumerate()
            .map(|(column, code)| {
                let texts = self
                    .translations
                    .iter()
                    .filter_map(|row| row.get(column).cloned())
                    .collect();
                (code.clone(), texts)
            })
            .collect()
    }
}
