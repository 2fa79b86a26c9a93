//! Language code types
//!
//! Language codes are opaque ISO 639-1 style strings (`"en"`, `"ja"`, `"zh"`).
//! Several endpoints carry a list of codes as one comma-separated string
//! (`"ja,es,fr"`); [`LanguageList`] is the typed view of that encoding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 639-1 language code, kept as an opaque string
pub type LanguageCode = String;

/// Ordered list of language codes with a comma-separated wire form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LanguageList(Vec<LanguageCode>);

impl LanguageList {
    /// Create a list from individual codes
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LanguageCode>,
    {
        Self(codes.into_iter().map(Into::into).collect())
    }

    /// Split a comma-separated string; blank segments are dropped and
    /// surrounding whitespace is trimmed.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Iterate over the codes in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Check whether a code is in the list
    pub fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|c| c == code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the underlying codes
    pub fn into_vec(self) -> Vec<LanguageCode> {
        self.0
    }
}

impl fmt::Display for LanguageList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

impl From<String> for LanguageList {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for LanguageList {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<LanguageList> for String {
    fn from(value: LanguageList) -> Self {
        value.to_string()
    }
}

impl From<Vec<LanguageCode>> for LanguageList {
    fn from(value: Vec<LanguageCode>) -> Self {
        Self(value)
    }
}

impl<'a> IntoIterator for &'a LanguageList {
    type Item = &'a LanguageCode;
    type IntoIter = std::slice::Iter<'a, LanguageCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_separated() {
        let list = LanguageList::parse("ja,es,fr");
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["ja", "es", "fr"]);
        assert!(list.contains("es"));
        assert!(!list.contains("de"));
    }

    #[test]
    fn test_parse_trims_and_skips_blanks() {
        let list = LanguageList::parse(" en , ,zh,");
        assert_eq!(list.into_vec(), vec!["en".to_string(), "zh".to_string()]);
        assert!(LanguageList::parse("").is_empty());
    }

    #[test]
    fn test_display_joins_with_commas() {
        let list = LanguageList::new(["en", "zh", "ja"]);
        assert_eq!(list.to_string(), "en,zh,ja");
    }

    #[test]
    fn test_serde_uses_string_form() {
        let list = LanguageList::new(["ja", "es"]);
        assert_eq!(serde_json::to_string(&list).unwrap(), "\"ja,es\"");

        let back: LanguageList = serde_json::from_str("\"ja,es\"").unwrap();
        assert_eq!(back, list);
    }
}
