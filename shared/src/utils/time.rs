//! Timestamp formatting for the wire contract
//!
//! Instants travel as ISO 8601 strings with millisecond precision and a `Z`
//! suffix (`2024-01-15T12:00:00.000Z`). Parsing accepts any RFC 3339 offset.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current instant rendered in wire format
pub fn now_iso() -> String {
    format_iso(&Utc::now())
}

/// Render an instant in wire format
pub fn format_iso(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 string into a UTC instant
pub fn parse_iso(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|dt| dt.with_timezone(&Utc))
}

/// Serde adapter for `DateTime<Utc>` fields, used as `#[serde(with = "iso_timestamp")]`
pub mod iso_timestamp {
    use super::{format_iso, parse_iso};
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_iso(instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_iso(&raw).map_err(de::Error::custom)
    }

    /// Same adapter for nullable timestamps (`null` before persistence)
    pub mod option {
        use super::{format_iso, parse_iso};
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(instant: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match instant {
                Some(instant) => serializer.serialize_str(&format_iso(instant)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| parse_iso(&raw).map_err(de::Error::custom))
                .transpose()
        }
    }
}
