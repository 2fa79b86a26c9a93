//! Dictionary request bodies, callback lookup and search payloads

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wl_shared::{LanguageCode, LanguageList};

use crate::domain::DictionaryTranslations;

/// Body for creating dictionary translations.
///
/// The body is the bare `{ "en": "hello", "es": "hola" }` map, not wrapped in
/// an object.
pub type DictionaryCreateRequest = DictionaryTranslations;

/// Body for updating dictionary translations, same bare map as creation
pub type DictionaryUpdateRequest = DictionaryTranslations;

/// Query of the dictionary lookup callback the translation service calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryLookupRequest {
    /// Term to look up
    pub term: String,

    /// Comma-separated language codes, e.g. `ja,es,fr`
    pub languages: String,
}

impl DictionaryLookupRequest {
    /// The requested languages as a list
    pub fn language_codes(&self) -> LanguageList {
        LanguageList::parse(&self.languages)
    }
}

/// Answer of the dictionary lookup callback.
///
/// A requested language without a translation maps to `null`; that is not
/// the same as the language being absent from the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryLookupResponse {
    pub term: String,

    pub translations: HashMap<LanguageCode, Option<String>>,
}

impl DictionaryLookupResponse {
    /// Languages that were looked up but have no translation
    pub fn missing_languages(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .translations
            .iter()
            .filter(|(_, text)| text.is_none())
            .map(|(code, _)| code.as_str())
            .collect();
        missing.sort_unstable();
        missing
    }
}

/// Result of the dictionary search endpoint: the matching dictionary and
/// all of its translations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionarySearchResponse {
    pub dictionary_id: String,

    pub translations: DictionaryTranslations,
}
