//! Dictionary entities and the flattened translations map

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wl_shared::{iso_timestamp, LanguageCode, Timestamp};

/// Language code to translated text.
///
/// Keys are unique and unordered; the map may be empty. This is also the
/// body of dictionary create/update requests.
pub type DictionaryTranslations = HashMap<LanguageCode, String>;

/// A dictionary container within a project, holding term entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    /// Primary key
    pub id: String,

    /// Owning entity/organization
    pub entity_id: String,

    /// Parent project
    pub project_id: String,

    #[serde(default, with = "iso_timestamp::option")]
    pub created_at: Option<Timestamp>,

    #[serde(default, with = "iso_timestamp::option")]
    pub updated_at: Option<Timestamp>,
}

/// A single term in a single language.
///
/// Entries sharing a `dictionary_id` together form the translations of one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub id: String,

    /// Parent dictionary
    pub dictionary_id: String,

    /// ISO 639-1 code (e.g. `en`, `ja`)
    pub language_code: LanguageCode,

    pub text: String,

    #[serde(default, with = "iso_timestamp::option")]
    pub created_at: Option<Timestamp>,

    #[serde(default, with = "iso_timestamp::option")]
    pub updated_at: Option<Timestamp>,
}

impl DictionaryEntry {
    /// Collect entries into the flattened language → text map.
    ///
    /// When two entries share a language code the later one wins.
    pub fn flatten<'a, I>(entries: I) -> DictionaryTranslations
    where
        I: IntoIterator<Item = &'a DictionaryEntry>,
    {
        entries
            .into_iter()
            .map(|entry| (entry.language_code.clone(), entry.text.clone()))
            .collect()
    }
}
