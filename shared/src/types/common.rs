//! Common type aliases used across the contract

use chrono::{DateTime, Utc};

/// Instant carried by entity timestamp fields
pub type Timestamp = DateTime<Utc>;

/// A string holding an ISO 8601 date or date-time.
///
/// Date-times use `YYYY-MM-DDTHH:mm:ss.sssZ`, date-only fields use
/// `YYYY-MM-DD`. The value is never parsed by the contract and passes
/// through exactly as produced.
pub type IsoDateString = String;

/// Opaque record identifier
pub type EntityId = String;
