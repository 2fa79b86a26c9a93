//! Common utility functions

pub mod query;
pub mod time;

// Re-export commonly used utilities
pub use query::{bool_flag, parse_bool_flag, parse_date, DATE_FORMAT};
pub use time::{format_iso, iso_timestamp, now_iso, parse_iso};
