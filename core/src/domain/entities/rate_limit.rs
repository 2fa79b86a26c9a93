//! Rate limit tiers and the computed status projection

use serde::{Deserialize, Serialize};
use std::fmt;
use wl_shared::IsoDateString;

/// Subscription tier that determines rate limits and feature access.
///
/// Tier names the contract does not know are carried through unchanged as
/// [`RateLimitTier::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RateLimitTier {
    Free,
    Starter,
    Pro,
    Enterprise,
    Other(String),
}

impl RateLimitTier {
    pub fn as_str(&self) -> &str {
        match self {
            RateLimitTier::Free => "free",
            RateLimitTier::Starter => "starter",
            RateLimitTier::Pro => "pro",
            RateLimitTier::Enterprise => "enterprise",
            RateLimitTier::Other(name) => name,
        }
    }

    /// Whether this is one of the four published tiers
    pub fn is_known(&self) -> bool {
        !matches!(self, RateLimitTier::Other(_))
    }
}

impl From<String> for RateLimitTier {
    fn from(value: String) -> Self {
        match value.as_str() {
            "free" => RateLimitTier::Free,
            "starter" => RateLimitTier::Starter,
            "pro" => RateLimitTier::Pro,
            "enterprise" => RateLimitTier::Enterprise,
            _ => {
                tracing::debug!(tier = %value, "passing through unknown rate limit tier");
                RateLimitTier::Other(value)
            }
        }
    }
}

impl From<&str> for RateLimitTier {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<RateLimitTier> for String {
    fn from(value: RateLimitTier) -> Self {
        match value {
            RateLimitTier::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RateLimitTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When the rate limit counters reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitResets {
    /// e.g. `2024-02-01T00:00:00Z`
    pub monthly: IsoDateString,

    /// e.g. `2024-01-15T15:00:00Z`
    pub hourly: IsoDateString,
}

/// Current rate limit status for an entity.
///
/// A read-only projection computed by the API; `monthly_used <= monthly_limit`
/// is expected but not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitStatus {
    pub tier: RateLimitTier,

    pub monthly_limit: u64,
    pub monthly_used: u64,
    /// Zero once the limit is reached
    pub monthly_remaining: u64,

    pub hourly_limit: u64,
    pub hourly_used: u64,
    /// Zero once the limit is reached
    pub hourly_remaining: u64,

    pub resets_at: RateLimitResets,
}

impl RateLimitStatus {
    /// Whether either window has no requests left
    pub fn is_exhausted(&self) -> bool {
        self.monthly_remaining == 0 || self.hourly_remaining == 0
    }
}
