//! Type definitions module with domain-specific sub-modules
//!
//! This module organizes types into logical categories:
//! - `common` - Timestamp, date-string and identifier aliases
//! - `language` - Language codes and comma-separated language lists
//! - `pagination` - Pagination for list endpoints
//! - `patch` - Tri-state field for partial updates
//! - `response` - API response envelope and its helpers

pub mod common;
pub mod language;
pub mod pagination;
pub mod patch;
pub mod response;

// Re-export commonly used types at module level
pub use common::{EntityId, IsoDateString, Timestamp};
pub use language::{LanguageCode, LanguageList};
pub use pagination::{PaginatedResponse, PaginationInfo, PaginationOptions};
pub use patch::Patch;
pub use response::{error_response, success_response, ApiResponse, BaseResponse};
