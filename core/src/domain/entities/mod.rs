//! Persisted record shapes.

pub mod dictionary;
pub mod project;
pub mod rate_limit;
pub mod usage;
pub mod user;

// Re-export commonly used types
pub use dictionary::{Dictionary, DictionaryEntry, DictionaryTranslations};
pub use project::Project;
pub use rate_limit::{RateLimitResets, RateLimitStatus, RateLimitTier};
pub use usage::UsageRecord;
pub use user::{User, UserSettings};
