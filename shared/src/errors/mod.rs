//! Shared error types
//!
//! The contract itself never fails: envelopes and DTOs accept whatever they
//! are given. `ContractError` only covers the opt-in read helpers that
//! interpret string-typed values (query parameters, contract version names).

use thiserror::Error;

/// Errors raised while interpreting string-typed contract values
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Invalid boolean flag for `{field}`: expected \"true\" or \"false\", got {value:?}")]
    InvalidBooleanFlag { field: String, value: String },

    #[error("Invalid date for `{field}`: expected YYYY-MM-DD, got {value:?}")]
    InvalidDate { field: String, value: String },

    #[error("Invalid contract version: {0}")]
    InvalidContractVersion(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ContractError {
    /// Machine-readable code for this error, see [`error_codes`]
    pub fn code(&self) -> &'static str {
        match self {
            ContractError::InvalidBooleanFlag { .. } | ContractError::InvalidDate { .. } => {
                error_codes::BAD_REQUEST
            }
            ContractError::InvalidContractVersion(_) => error_codes::CONFIG_ERROR,
            ContractError::Json(_) => error_codes::SERIALIZATION_ERROR,
        }
    }
}

/// Common error codes the API layer places in error envelopes
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const RATE_LIMIT_EXCEEDED: &str = "RATE_LIMIT_EXCEEDED";
    pub const IP_NOT_ALLOWED: &str = "IP_NOT_ALLOWED";
    pub const INVALID_API_KEY: &str = "INVALID_API_KEY";
    pub const PROJECT_INACTIVE: &str = "PROJECT_INACTIVE";
    pub const TRANSLATION_FAILED: &str = "TRANSLATION_FAILED";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
}

/// Result type with ContractError as error
pub type ContractResult<T> = Result<T, ContractError>;
