//! API response envelope and the helpers that build it

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::errors::ContractResult;
use crate::utils::time::now_iso;

/// Standard API response envelope
///
/// Every Whisperly endpoint answers with this wrapper. `data` is present iff
/// `success` is true, `error` is present iff `success` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Response data (present on success)
    ///
    /// A present key is always `Some`, even when it carries `null`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present",
        bound(deserialize = "T: Deserialize<'de>")
    )]
    pub data: Option<T>,

    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// ISO 8601 instant with millisecond precision, e.g. `2024-01-15T12:00:00.000Z`
    pub timestamp: String,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Alias kept for clients written against the `BaseResponse` name
pub type BaseResponse<T> = ApiResponse<T>;

/// Wrap `data` in a success envelope stamped with the current time.
pub fn success_response<T>(data: T) -> ApiResponse<T> {
    ApiResponse {
        success: true,
        data: Some(data),
        error: None,
        timestamp: now_iso(),
    }
}

/// Build an error envelope carrying `error` verbatim, stamped with the current time.
pub fn error_response<T>(error: impl Into<String>) -> ApiResponse<T> {
    ApiResponse {
        success: false,
        data: None,
        error: Some(error.into()),
        timestamp: now_iso(),
    }
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        success_response(data)
    }

    /// Create an error response
    pub fn error(error: impl Into<String>) -> Self {
        error_response(error)
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Check if the response is an error
    pub fn is_error(&self) -> bool {
        !self.success
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Convert into a `Result`, using the error message on failure.
    ///
    /// A failed envelope without an error message yields an empty string.
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.error.unwrap_or_default())
        }
    }

    /// Map the data to a different type
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            timestamp: self.timestamp,
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Parse an envelope received from the API
    pub fn from_json(raw: &str) -> ContractResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Render the envelope as JSON
    pub fn to_json(&self) -> ContractResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
