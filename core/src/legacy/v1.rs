//! Contract v1: user-owned projects and subscription tiers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use wl_shared::{iso_timestamp, LanguageCode, Timestamp};

/// Subscription tier. v1 publishes no free tier; other names pass through
/// as [`SubscriptionTier::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubscriptionTier {
    Starter,
    Pro,
    Enterprise,
    Other(String),
}

impl SubscriptionTier {
    pub fn as_str(&self) -> &str {
        match self {
            SubscriptionTier::Starter => "starter",
            SubscriptionTier::Pro => "pro",
            SubscriptionTier::Enterprise => "enterprise",
            SubscriptionTier::Other(name) => name,
        }
    }
}

impl From<String> for SubscriptionTier {
    fn from(value: String) -> Self {
        match value.as_str() {
            "starter" => SubscriptionTier::Starter,
            "pro" => SubscriptionTier::Pro,
            "enterprise" => SubscriptionTier::Enterprise,
            _ => SubscriptionTier::Other(value),
        }
    }
}

impl From<SubscriptionTier> for String {
    fn from(value: SubscriptionTier) -> Self {
        match value {
            SubscriptionTier::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// v1 project, owned directly by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,

    /// Owning user
    pub user_id: String,

    pub project_name: String,

    pub display_name: String,

    pub description: Option<String>,

    pub instructions: Option<String>,

    pub is_active: Option<bool>,

    #[serde(default, with = "iso_timestamp::option")]
    pub created_at: Option<Timestamp>,

    #[serde(default, with = "iso_timestamp::option")]
    pub updated_at: Option<Timestamp>,
}

/// A user's subscription with its usage counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,

    /// Subscribed user
    pub user_id: String,

    pub tier: SubscriptionTier,

    /// RevenueCat entitlement identifier, e.g. `pro_monthly`
    pub revenuecat_entitlement: Option<String>,

    pub monthly_request_limit: u64,

    pub hourly_request_limit: u64,

    pub requests_this_month: u64,

    pub requests_this_hour: u64,

    #[serde(default, with = "iso_timestamp::option")]
    pub month_reset_at: Option<Timestamp>,

    #[serde(default, with = "iso_timestamp::option")]
    pub hour_reset_at: Option<Timestamp>,

    #[serde(default, with = "iso_timestamp::option")]
    pub created_at: Option<Timestamp>,

    #[serde(default, with = "iso_timestamp::option")]
    pub updated_at: Option<Timestamp>,
}

impl Subscription {
    /// Requests left this month, zero when the counter is past the limit
    pub fn monthly_remaining(&self) -> u64 {
        self.monthly_request_limit.saturating_sub(self.requests_this_month)
    }

    /// Requests left this hour, zero when the counter is past the limit
    pub fn hourly_remaining(&self) -> u64 {
        self.hourly_request_limit.saturating_sub(self.requests_this_hour)
    }
}

/// v1 translation answer; dictionary terms were still called glossaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translations: HashMap<LanguageCode, Vec<String>>,

    pub glossaries_used: Vec<String>,

    pub request_id: String,
}
