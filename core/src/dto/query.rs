//! Query-parameter bags
//!
//! Every value arrives as a string from the URL query. Booleans use the
//! literal strings `"true"` / `"false"`, dates use `YYYY-MM-DD`. The bags hold
//! the raw strings; the accessor methods interpret them on demand.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wl_shared::query::{parse_bool_flag, parse_date};
use wl_shared::ContractResult;

/// Query parameters for listing projects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectQueryParams {
    /// `"true"` or `"false"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<String>,
}

impl ProjectQueryParams {
    pub fn is_active_filter(&self) -> ContractResult<Option<bool>> {
        parse_bool_flag("is_active", self.is_active.as_deref())
    }
}

/// Query parameters for usage analytics.
///
/// When both dates are given the range is inclusive on both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageAnalyticsQueryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// `YYYY-MM-DD`, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// `YYYY-MM-DD`, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// `"true"` or `"false"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
}

impl UsageAnalyticsQueryParams {
    pub fn success_filter(&self) -> ContractResult<Option<bool>> {
        parse_bool_flag("success", self.success.as_deref())
    }

    /// Parsed `(start_date, end_date)`. Ordering of the two is not checked.
    pub fn date_range(&self) -> ContractResult<(Option<NaiveDate>, Option<NaiveDate>)> {
        Ok((
            parse_date("start_date", self.start_date.as_deref())?,
            parse_date("end_date", self.end_date.as_deref())?,
        ))
    }
}
