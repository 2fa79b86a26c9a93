//! # Whisperly Core
//!
//! Type catalog of the Whisperly localization API: entity shapes, request
//! bodies, query-parameter bags and response payloads. Nothing here performs
//! I/O or validation; the API layer owns both.
//!
//! The current contract (v3) is exported from the crate root. Earlier
//! snapshots live under [`legacy`].

pub mod domain;
pub mod dto;
pub mod legacy;
pub mod responses;

// Re-export commonly used types for convenience
pub use domain::*;
pub use dto::*;
pub use responses::*;

// Envelope helpers and shared shapes, so clients need a single import
pub use wl_shared::{
    error_response, success_response, ApiResponse, BaseResponse, ContractVersion, IsoDateString,
    PaginatedResponse, PaginationInfo, PaginationOptions, Patch,
};
