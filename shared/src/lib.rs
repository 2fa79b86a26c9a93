//! Shared envelope and common types for the Whisperly contract
//!
//! This crate provides the pieces every part of the contract builds on:
//! - The `ApiResponse` envelope with `success_response` / `error_response`
//! - Pagination shapes and the tri-state `Patch` field
//! - Timestamp and query-string helpers
//! - Configuration and error types

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ContractVersion, ServiceConfig};
pub use errors::{error_codes, ContractError, ContractResult};
pub use types::{
    error_response, success_response, ApiResponse, BaseResponse, EntityId, IsoDateString,
    LanguageCode, LanguageList, PaginatedResponse, PaginationInfo, PaginationOptions, Patch,
    Timestamp,
};
pub use utils::{iso_timestamp, query, time};
