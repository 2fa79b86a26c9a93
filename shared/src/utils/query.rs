//! Interpreting query-string values
//!
//! Query parameters reach the contract as raw strings. These helpers turn the
//! conventional encodings into typed values without touching the parameter
//! bag itself.

use chrono::NaiveDate;

use crate::errors::{ContractError, ContractResult};

/// Date-only wire format (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Interpret an optional `"true"`/`"false"` query flag.
///
/// Absent flags mean "no filter". Matching is exact: `"TRUE"` or `"1"` are rejected.
pub fn parse_bool_flag(field: &str, value: Option<&str>) -> ContractResult<Option<bool>> {
    match value {
        None => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => {
            tracing::debug!(field, value = other, "unrecognized boolean query flag");
            Err(ContractError::InvalidBooleanFlag {
                field: field.to_string(),
                value: other.to_string(),
            })
        }
    }
}

/// Interpret an optional `YYYY-MM-DD` query date.
pub fn parse_date(field: &str, value: Option<&str>) -> ContractResult<Option<NaiveDate>> {
    let Some(raw) = value else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| {
            tracing::debug!(field, value = raw, "unparseable date query parameter");
            ContractError::InvalidDate {
                field: field.to_string(),
                value: raw.to_string(),
            }
        })
}

/// Render a boolean in its query-string form
pub fn bool_flag(value: bool) -> String {
    value.to_string()
}
