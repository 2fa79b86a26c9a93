//! Usage audit records

use serde::{Deserialize, Serialize};
use wl_shared::{iso_timestamp, Timestamp};

/// One translation API request as recorded for analytics.
///
/// Rows are immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Primary key
    pub uuid: String,

    /// Entity that made the request
    pub entity_id: String,

    /// Project the request targeted
    pub project_id: String,

    /// When the request occurred
    #[serde(with = "iso_timestamp")]
    pub timestamp: Timestamp,

    /// Usually 1
    pub request_count: u64,

    pub string_count: u64,

    pub character_count: u64,

    pub success: bool,

    /// Null on success
    pub error_message: Option<String>,
}

impl UsageRecord {
    pub fn is_failure(&self) -> bool {
        !self.success
    }
}
