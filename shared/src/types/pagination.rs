//! Pagination shapes for list endpoints

use serde::{Deserialize, Serialize};

/// Pagination parameters accepted by list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationOptions {
    /// Maximum number of items to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of items to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl PaginationOptions {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// Effective limit, falling back to [`DEFAULT_LIMIT`] and capped at [`MAX_LIMIT`]
    pub fn limit_or_default(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Effective offset, zero when absent
    pub fn offset_or_default(&self) -> u32 {
        self.offset.unwrap_or(0)
    }
}

/// Page metadata returned alongside list results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Total number of items across all pages
    pub total: u64,

    /// Page size used for this response
    pub limit: u32,

    /// Offset of the first item in this page
    pub offset: u32,

    /// Whether more items follow this page
    pub has_more: bool,
}

impl PaginationInfo {
    pub fn new(total: u64, limit: u32, offset: u32) -> Self {
        let has_more = u64::from(offset) + u64::from(limit) < total;
        Self {
            total,
            limit,
            offset,
            has_more,
        }
    }
}

/// Paginated list wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Items on this page
    pub items: Vec<T>,

    /// Page metadata
    pub pagination: PaginationInfo,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(items: Vec<T>, options: &PaginationOptions, total: u64) -> Self {
        Self {
            items,
            pagination: PaginationInfo::new(
                total,
                options.limit_or_default(),
                options.offset_or_default(),
            ),
        }
    }

    /// Create an empty paginated response
    pub fn empty(options: &PaginationOptions) -> Self {
        Self::new(Vec::new(), options, 0)
    }

    /// Transform the items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_defaults() {
        let options = PaginationOptions::default();
        assert_eq!(options.limit_or_default(), 20);
        assert_eq!(options.offset_or_default(), 0);
        assert_eq!(serde_json::to_value(&options).unwrap(), json!({}));

        let big = PaginationOptions::new(1000, 5);
        assert_eq!(big.limit_or_default(), 100);
    }

    #[test]
    fn test_has_more() {
        assert!(PaginationInfo::new(45, 20, 20).has_more);
        assert!(!PaginationInfo::new(40, 20, 20).has_more);
        assert!(!PaginationInfo::new(0, 20, 0).has_more);
    }

    #[test]
    fn test_paginated_response_map() {
        let options = PaginationOptions::new(2, 0);
        let page = PaginatedResponse::new(vec![1, 2], &options, 5).map(|n| n.to_string());

        assert_eq!(page.items, vec!["1".to_string(), "2".to_string()]);
        assert!(page.pagination.has_more);
        assert!(!PaginatedResponse::<u8>::empty(&options).pagination.has_more);
    }

    #[test]
    fn test_wire_shape() {
        let page = PaginatedResponse::new(vec!["a"], &PaginationOptions::new(10, 0), 1);
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({
                "items": ["a"],
                "pagination": { "total": 1, "limit": 10, "offset": 0, "has_more": false }
            })
        );
    }
}
