//! Page-based pagination for list endpoints.
//!
//! Clients send `page` (1-indexed) and `limit`; the service layer receives
//! the resolved [`PageWindow`] so it never has to re-apply the clamping.
//!
//! ```ignore
//! // GET /api/products?page=3&limit=20
//! let window = params.window();
//! assert_eq!(window.offset, 40);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::serde::deserialize_optional_i64;

pub const DEFAULT_LIMIT: i64 = 25;
pub const MAX_LIMIT: i64 = 250;
/// Highest page whose offset still fits in an `i64` at any limit.
pub const MAX_PAGE: i64 = i64::MAX / MAX_LIMIT;

/// Query parameters for pagination.
///
/// - `limit` is clamped to [1, 250] and defaults to 25
/// - `page` is clamped to [1, `MAX_PAGE`] and defaults to 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    /// Items per page (1-250, default: 25)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
}

/// Resolved pagination window forwarded to the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
}

impl PaginationParams {
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).clamp(1, MAX_PAGE)
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }

    #[must_use]
    pub fn window(&self) -> PageWindow {
        PageWindow {
            page: self.page(),
            limit: self.limit(),
            offset: self.offset(),
        }
    }
}
