//! Domain layer: entity shapes and read-only projections.

pub mod entities;

pub use entities::{
    Dictionary, DictionaryEntry, DictionaryTranslations, Project, RateLimitResets,
    RateLimitStatus, RateLimitTier, UsageRecord, User, UserSettings,
};
