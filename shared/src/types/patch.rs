//! Tri-state field for partial updates
//!
//! Update requests distinguish three cases for a clearable field:
//! the key is absent (leave the stored value alone), the key is `null`
//! (clear the stored value), or the key carries a value (replace it).
//!
//! Use with `#[serde(default, skip_serializing_if = "Patch::is_unchanged")]`
//! so that an absent key deserializes to [`Patch::Unchanged`] and
//! `Unchanged` is omitted on the way out.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Field not provided; keep the current value
    Unchanged,
    /// Field explicitly `null`; clear the current value
    Cleared,
    /// Field provided; replace the current value
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Patch::Unchanged)
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, Patch::Cleared)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    /// The new value, if one was provided
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            _ => None,
        }
    }

    /// Collapse to the two-level `Option<Option<T>>` form:
    /// `None` = unchanged, `Some(None)` = cleared, `Some(Some(v))` = set.
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Patch::Unchanged => None,
            Patch::Cleared => Some(None),
            Patch::Set(value) => Some(Some(value)),
        }
    }

    /// Apply this patch to a stored nullable value
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Patch::Unchanged => {}
            Patch::Cleared => *target = None,
            Patch::Set(value) => *target = Some(value),
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unchanged
    }
}

impl<T> From<Option<T>> for Patch<T> {
    /// `None` maps to `Cleared`: an explicit nullable value, not an omission.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Cleared,
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Set(value) => serializer.serialize_some(value),
            // Unchanged is normally skipped by the field attribute
            Patch::Unchanged | Patch::Cleared => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Update {
        #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
        api_key: Patch<String>,
    }

    #[test]
    fn test_absent_key_is_unchanged() {
        let update: Update = serde_json::from_value(json!({})).unwrap();
        assert!(update.api_key.is_unchanged());
    }

    #[test]
    fn test_null_is_cleared() {
        let update: Update = serde_json::from_value(json!({ "api_key": null })).unwrap();
        assert!(update.api_key.is_cleared());
    }

    #[test]
    fn test_value_is_set() {
        let update: Update = serde_json::from_value(json!({ "api_key": "k-1" })).unwrap();
        assert_eq!(update.api_key.as_set().map(String::as_str), Some("k-1"));
    }

    #[test]
    fn test_serialization_keeps_the_distinction() {
        let unchanged = Update::default();
        assert_eq!(serde_json::to_value(&unchanged).unwrap(), json!({}));

        let cleared = Update { api_key: Patch::Cleared };
        assert_eq!(serde_json::to_value(&cleared).unwrap(), json!({ "api_key": null }));

        let set = Update { api_key: Patch::Set("k-2".to_string()) };
        assert_eq!(serde_json::to_value(&set).unwrap(), json!({ "api_key": "k-2" }));
    }

    #[test]
    fn test_apply_to() {
        let mut stored = Some("old".to_string());

        Patch::Unchanged.apply_to(&mut stored);
        assert_eq!(stored.as_deref(), Some("old"));

        Patch::Set("new".to_string()).apply_to(&mut stored);
        assert_eq!(stored.as_deref(), Some("new"));

        Patch::Cleared.apply_to(&mut stored);
        assert_eq!(stored, None);
    }

    #[test]
    fn test_into_option() {
        assert_eq!(Patch::<u8>::Unchanged.into_option(), None);
        assert_eq!(Patch::<u8>::Cleared.into_option(), Some(None));
        assert_eq!(Patch::Set(3u8).into_option(), Some(Some(3)));
    }
}
