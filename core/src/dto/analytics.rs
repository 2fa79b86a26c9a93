//! Usage analytics payloads

use serde::{Deserialize, Serialize};
use wl_shared::IsoDateString;

/// Totals for a period.
///
/// `success_rate` is a fraction in `[0, 1]` (0.95 = 95%); the producer is
/// responsible for keeping it in range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageAggregate {
    pub total_requests: u64,
    pub total_strings: u64,
    pub total_characters: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub success_rate: f64,
    /// `YYYY-MM-DD`
    pub period_start: IsoDateString,
    /// `YYYY-MM-DD`
    pub period_end: IsoDateString,
}

/// Usage for one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageByProject {
    pub project_id: String,
    /// Machine name of the project
    pub project_name: String,
    pub request_count: u64,
    pub string_count: u64,
    pub character_count: u64,
    pub success_rate: f64,
}

/// Usage for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageByDate {
    /// `YYYY-MM-DD`
    pub date: IsoDateString,
    pub request_count: u64,
    pub string_count: u64,
    pub character_count: u64,
}

/// Aggregate, per-project and per-day breakdowns for the queried period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub aggregate: UsageAggregate,
    pub by_project: Vec<UsageByProject>,
    pub by_date: Vec<UsageByDate>,
}
